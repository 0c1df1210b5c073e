use steam_inventory_cache::InventoryLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    // Either a 64-bit Steam ID or a legacy STEAM_X:Y:Z ID.
    let identifier = std::env::var("STEAMID")
        .unwrap_or_else(|_| panic!("STEAMID missing"));
    let loader = InventoryLoader::builder()
        .cache_time(5)
        .build();
    let inventory = loader.load(&identifier).await?;
    
    println!("{:?} inventory for {}", inventory.state(), inventory.identifier());
    
    for item in inventory.descriptions() {
        println!("{} ({})", item.name, item.exterior.as_deref().unwrap_or("-"));
    }
    
    // The second load is served from the cache.
    let inventory = loader.load(&identifier).await?;
    
    println!("Loaded from {:?}", inventory.source());
    
    if let Some(items) = inventory.inventory_with_descriptions(2) {
        println!("{} items in inventory", items.len());
        
        if let Some(item) = items.first() {
            println!("First item: {}", item.to_json());
        }
    }
    
    Ok(())
}
