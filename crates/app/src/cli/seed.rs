use catalog_app::{
    seed::{seed_catalog, sample_records},
    store::{DynamoStore, StoreSettings},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    #[command(flatten)]
    store: StoreSettings,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let store = DynamoStore::connect(args.store).await;
    let records = sample_records(&mut rand::thread_rng());

    let seeded = seed_catalog(&store, records)
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    for id in &seeded {
        println!("product_id: {id}");
    }

    println!("seeded {} products", seeded.len());

    Ok(())
}
