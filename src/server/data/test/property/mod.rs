use crate::server::{
    data::property::PropertyRepository,
    model::property::{CreatePropertyParam, PropertyFields, UpdatePropertyParam},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod update;

fn fields(title: &str) -> PropertyFields {
    PropertyFields {
        title: title.to_string(),
        description: Some("Bright and quiet".to_string()),
        address: "12 Harbour Lane".to_string(),
        category: "flat".to_string(),
        price: 950.0,
        bedrooms: 2,
        bathrooms: 1,
        status: "available".to_string(),
    }
}
