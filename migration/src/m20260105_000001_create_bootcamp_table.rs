use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bootcamp::Table)
                    .if_not_exists()
                    .col(pk_auto(Bootcamp::Id))
                    .col(string_uniq(Bootcamp::Name))
                    .col(string(Bootcamp::Slug))
                    .col(string(Bootcamp::Description))
                    .col(string_null(Bootcamp::WebsiteWork))
                    .col(string_null(Bootcamp::WebsiteProfile))
                    .col(string_null(Bootcamp::Email))
                    .col(string_null(Bootcamp::Phone))
                    .col(json(Bootcamp::Careers))
                    .col(double_null(Bootcamp::AverageRating))
                    .col(double_null(Bootcamp::AverageCost))
                    .col(string(Bootcamp::Photo))
                    .col(boolean(Bootcamp::Housing))
                    .col(boolean(Bootcamp::JobAssistance))
                    .col(boolean(Bootcamp::JobGuarantee))
                    .col(boolean(Bootcamp::AcceptGi))
                    .col(double(Bootcamp::LocationLat))
                    .col(double(Bootcamp::LocationLng))
                    .col(string_null(Bootcamp::FormattedAddress))
                    .col(string_null(Bootcamp::Street))
                    .col(string_null(Bootcamp::City))
                    .col(string_null(Bootcamp::State))
                    .col(string_null(Bootcamp::Zipcode))
                    .col(string_null(Bootcamp::Country))
                    .col(timestamp_with_time_zone(Bootcamp::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bootcamp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bootcamp {
    Table,
    Id,
    Name,
    Slug,
    Description,
    WebsiteWork,
    WebsiteProfile,
    Email,
    Phone,
    Careers,
    AverageRating,
    AverageCost,
    Photo,
    Housing,
    JobAssistance,
    JobGuarantee,
    AcceptGi,
    LocationLat,
    LocationLng,
    FormattedAddress,
    Street,
    City,
    State,
    Zipcode,
    Country,
    CreatedAt,
}
