use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub trip_name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub participants_number: i32,
    pub trip_status: String,
    pub estimated_weather_forecast: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub total_cost: f64,
    pub trip_image_url: String,
    pub lead_ranger: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::LeadRanger",
        to = "super::user::Column::Id"
    )]
    LeadRanger,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeadRanger.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
