use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Option<String>,
    pub rut: Option<String>,
    pub passport_number: Option<String>,
    pub role_id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    pub biography_extend: Option<Json>,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub user_status: String,
    /// Mean calification over every rated trip this user led. Written only by the
    /// rating aggregator.
    pub rating: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_role::Entity",
        from = "Column::RoleId",
        to = "super::user_role::Column::Id"
    )]
    UserRole,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
