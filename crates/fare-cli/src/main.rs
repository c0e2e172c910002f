use clap::{Parser, Subcommand};

use fare_content::{
    load_contact_info, load_features, load_stats, load_testimonials, ContactLoad, ContentClient,
    TracingNotifier,
};
use fare_core::contact::SOCIAL_PLATFORMS;
use fare_core::{load_app_config_from_env, resolve_media_ref, ContactRecord, ImageReference};

#[derive(Debug, Parser)]
#[command(name = "fare-cli")]
#[command(about = "fare site content command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and print the contact record from the content store.
    Contact,
    /// Fetch and print the feature, stat, and testimonial page sections.
    Sections,
    /// Resolve a raw image reference string and print the outcome.
    Resolve { value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Contact => contact().await?,
        Commands::Sections => sections().await?,
        Commands::Resolve { value } => resolve(&value),
    }

    Ok(())
}

async fn contact() -> anyhow::Result<()> {
    let config = load_app_config_from_env()?;
    let client = ContentClient::from_config(&config)?;
    let notifier = TracingNotifier;

    match load_contact_info(&client, &notifier).await {
        ContactLoad::Absent => println!("contact info: not available"),
        ContactLoad::Present(record) => print_contact(&record),
    }
    Ok(())
}

fn print_contact(record: &ContactRecord) {
    println!("address:");
    let mut any_line = false;
    for line in record.address_lines() {
        any_line = true;
        println!("  {line}");
    }
    if !any_line {
        println!("  not available");
    }

    let not_available = "not available".to_owned();
    println!("phone: {}", record.phone.as_ref().unwrap_or(&not_available));
    println!("email: {}", record.email.as_ref().unwrap_or(&not_available));
    println!(
        "maps:  {}",
        record.maps_link.as_ref().unwrap_or(&not_available)
    );

    println!("hours:");
    if record.business_hours.is_empty() {
        println!("  not available");
    } else {
        for (day, display) in record.business_hours.entries() {
            println!("  {day}: {display}");
        }
    }

    println!("links:");
    for platform in SOCIAL_PLATFORMS {
        if let Some(url) = record.social_links.url(platform) {
            println!("  {platform}: {url}");
        }
    }
}

async fn sections() -> anyhow::Result<()> {
    let config = load_app_config_from_env()?;
    let client = ContentClient::from_config(&config)?;

    println!("features:");
    for feature in load_features(&client).await {
        println!(
            "  [{}] {}: {}",
            feature.icon_name, feature.title, feature.description
        );
    }

    println!("stats:");
    for stat in load_stats(&client).await {
        println!("  [{}] {} {}", stat.icon_name, stat.value, stat.label);
    }

    println!("testimonials:");
    for testimonial in load_testimonials(&client).await {
        println!(
            "  {}/5 \"{}\" {}",
            testimonial.rating, testimonial.text, testimonial.name
        );
    }
    Ok(())
}

fn resolve(value: &str) {
    match resolve_media_ref(Some(value)) {
        ImageReference::Absent => println!("absent"),
        ImageReference::Remote(url) => println!("remote: {url}"),
        ImageReference::Inline { mime, payload } => {
            println!("inline: {} ({} base64 chars)", mime.as_str(), payload.len());
        }
    }
}
