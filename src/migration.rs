use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateTodoItemsTable)]
    }
}

pub struct CreateTodoItemsTable;

impl MigrationName for CreateTodoItemsTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_todo_items_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateTodoItemsTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(TodoItems::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(TodoItems::Id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(TodoItems::Title).string_len(50).not_null())
            .col(ColumnDef::new(TodoItems::Description).text().null())
            .to_owned();

        manager.create_table(table).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TodoItems {
    Table,
    Id,
    Title,
    Description,
}
