use super::*;
use crate::server::{
    model::resource::{CreateResourceParams, ResourceDescription},
    service::{association::AssociationService, resource::ResourceService},
};

mod create;
mod delete;
