use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_categories_table::Migration),
            Box::new(m20250601_000002_create_products_table::Migration),
            Box::new(m20250601_000003_create_product_images_table::Migration),
            Box::new(m20250601_000004_create_shipments_table::Migration),
            Box::new(m20250601_000005_create_banner_pictures_table::Migration),
            Box::new(m20250601_000006_create_background_images_table::Migration),
            Box::new(m20250601_000007_create_contact_messages_table::Migration),
            Box::new(m20250601_000008_create_contact_replies_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250601_000001_create_categories_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000001_create_categories_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Categories::Name)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Categories::Slug)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Categories::ImageUrl).string().null())
                        .col(
                            ColumnDef::new(Categories::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Categories::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_categories_name")
                        .table(Categories::Table)
                        .col(Categories::Name)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Categories {
        Table,
        Id,
        Name,
        Slug,
        ImageUrl,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000002_create_products_table {

    use sea_orm_migration::prelude::*;

    use super::m20250601_000001_create_categories_table::Categories;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000002_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Products::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Products::CategoryId).uuid().not_null())
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(ColumnDef::new(Products::Description).text().not_null())
                        .col(
                            ColumnDef::new(Products::Slug)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Products::Price)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Products::Size).string().null())
                        .col(
                            ColumnDef::new(Products::IsFeatured)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Products::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_category_id")
                                .from(Products::Table, Products::CategoryId)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_category_id")
                        .table(Products::Table)
                        .col(Products::CategoryId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_created_at")
                        .table(Products::Table)
                        .col(Products::CreatedAt)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_is_featured")
                        .table(Products::Table)
                        .col(Products::IsFeatured)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Products {
        Table,
        Id,
        CategoryId,
        Name,
        Description,
        Slug,
        Price,
        Size,
        IsFeatured,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000003_create_product_images_table {

    use sea_orm_migration::prelude::*;

    use super::m20250601_000002_create_products_table::Products;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000003_create_product_images_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ProductImages::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductImages::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ProductImages::ProductId).uuid().not_null())
                        .col(ColumnDef::new(ProductImages::Url).string().not_null())
                        .col(ColumnDef::new(ProductImages::AltText).string().null())
                        .col(
                            ColumnDef::new(ProductImages::IsPrimary)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(ProductImages::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_images_product_id")
                                .from(ProductImages::Table, ProductImages::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_product_images_product_id")
                        .table(ProductImages::Table)
                        .col(ProductImages::ProductId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProductImages::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum ProductImages {
        Table,
        Id,
        ProductId,
        Url,
        AltText,
        IsPrimary,
        CreatedAt,
    }
}

mod m20250601_000004_create_shipments_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000004_create_shipments_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Shipments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Shipments::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Shipments::Name).string().not_null())
                        .col(ColumnDef::new(Shipments::IconUrl).string().null())
                        .col(ColumnDef::new(Shipments::Description).text().not_null())
                        .col(ColumnDef::new(Shipments::DeliveryTime).string().not_null())
                        .col(ColumnDef::new(Shipments::Cost).string().not_null())
                        .col(
                            ColumnDef::new(Shipments::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Shipments::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Shipments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Shipments {
        Table,
        Id,
        Name,
        IconUrl,
        Description,
        DeliveryTime,
        Cost,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000005_create_banner_pictures_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000005_create_banner_pictures_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(BannerPictures::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(BannerPictures::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(BannerPictures::Name).string().not_null())
                        .col(ColumnDef::new(BannerPictures::ImageUrl).string().not_null())
                        .col(ColumnDef::new(BannerPictures::Title).string().null())
                        .col(ColumnDef::new(BannerPictures::Subtitle).string().null())
                        .col(
                            ColumnDef::new(BannerPictures::ButtonText)
                                .string()
                                .not_null()
                                .default("Shop Now"),
                        )
                        .col(ColumnDef::new(BannerPictures::ButtonLink).string().null())
                        .col(
                            ColumnDef::new(BannerPictures::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(BannerPictures::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BannerPictures::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_banner_pictures_is_active")
                        .table(BannerPictures::Table)
                        .col(BannerPictures::IsActive)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(BannerPictures::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum BannerPictures {
        Table,
        Id,
        Name,
        ImageUrl,
        Title,
        Subtitle,
        ButtonText,
        ButtonLink,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000006_create_background_images_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000006_create_background_images_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(BackgroundImages::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(BackgroundImages::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(BackgroundImages::Name).string().not_null())
                        .col(
                            ColumnDef::new(BackgroundImages::Section)
                                .string_len(32)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BackgroundImages::ImageUrl)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BackgroundImages::OverlayColor)
                                .string()
                                .not_null()
                                .default("#000000"),
                        )
                        .col(
                            ColumnDef::new(BackgroundImages::OverlayOpacity)
                                .float()
                                .not_null()
                                .default(0.5),
                        )
                        .col(
                            ColumnDef::new(BackgroundImages::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(BackgroundImages::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BackgroundImages::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_background_images_section")
                        .table(BackgroundImages::Table)
                        .col(BackgroundImages::Section)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(BackgroundImages::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum BackgroundImages {
        Table,
        Id,
        Name,
        Section,
        ImageUrl,
        OverlayColor,
        OverlayOpacity,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000007_create_contact_messages_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000007_create_contact_messages_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ContactMessages::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ContactMessages::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ContactMessages::Name).string().not_null())
                        .col(ColumnDef::new(ContactMessages::Email).string().not_null())
                        .col(ColumnDef::new(ContactMessages::Phone).string().null())
                        .col(ColumnDef::new(ContactMessages::Subject).string().not_null())
                        .col(ColumnDef::new(ContactMessages::Message).text().not_null())
                        .col(
                            ColumnDef::new(ContactMessages::Status)
                                .string_len(20)
                                .not_null()
                                .default("new"),
                        )
                        .col(ColumnDef::new(ContactMessages::OwnerNotes).text().null())
                        .col(
                            ColumnDef::new(ContactMessages::RepliedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ContactMessages::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContactMessages::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_contact_messages_status")
                        .table(ContactMessages::Table)
                        .col(ContactMessages::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_contact_messages_created_at")
                        .table(ContactMessages::Table)
                        .col(ContactMessages::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ContactMessages::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum ContactMessages {
        Table,
        Id,
        Name,
        Email,
        Phone,
        Subject,
        Message,
        Status,
        OwnerNotes,
        RepliedAt,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250601_000008_create_contact_replies_table {

    use sea_orm_migration::prelude::*;

    use super::m20250601_000007_create_contact_messages_table::ContactMessages;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250601_000008_create_contact_replies_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ContactReplies::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ContactReplies::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContactReplies::ContactMessageId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContactReplies::ReplySubject)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ContactReplies::ReplyMessage)
                                .text()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ContactReplies::SentBy).string().null())
                        .col(
                            ColumnDef::new(ContactReplies::EmailSent)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(ContactReplies::SentAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_contact_replies_contact_message_id")
                                .from(ContactReplies::Table, ContactReplies::ContactMessageId)
                                .to(ContactMessages::Table, ContactMessages::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_contact_replies_contact_message_id")
                        .table(ContactReplies::Table)
                        .col(ContactReplies::ContactMessageId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ContactReplies::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum ContactReplies {
        Table,
        Id,
        ContactMessageId,
        ReplySubject,
        ReplyMessage,
        SentBy,
        EmailSent,
        SentAt,
    }
}
