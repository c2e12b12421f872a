use crate::server::data::rating::RatingRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
