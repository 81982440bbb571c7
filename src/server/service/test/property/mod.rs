use crate::server::{
    error::AppError,
    model::property::{PropertyFields, UpdatePropertyParam},
    service::property::PropertyService,
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory, factory::property::PropertyFactory};

mod delete;
mod get_by_id;
mod get_paginated;
mod update;
