use crate::server::{
    data::property_image::PropertyImageRepository,
    model::upload::{StoredFile, UploadFolder},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use std::path::PathBuf;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
