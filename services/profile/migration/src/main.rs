use sea_orm_migration::prelude::*;

use uniport_profile_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
