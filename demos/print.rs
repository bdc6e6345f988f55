use futures::StreamExt;

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter(None, log::LevelFilter::Info)
        .filter_module("eonet", log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let client = eonet::shared();

    let mut categories = client.categories();
    let categories = categories.next().await.unwrap_or_default();
    if categories.is_empty() {
        log::error!("no categories");
        return;
    }

    for category in &categories {
        println!("{:>6}  {}", category.id.to_string(), category.name);
    }

    let mut category = categories[0].clone();
    let events = client.events(eonet::DEFAULT_DAYS, &category).await;
    category.add_events(&events);

    println!("\n{} ({} events):", category.name, category.events.len());
    for event in &category.events {
        let state = if event.closed.is_some() { "closed" } else { "open" };
        println!(
            "    {}  {:<6}  {:.80}",
            event.date.format("%Y-%m-%d"),
            state,
            event.title
        );
    }
}
