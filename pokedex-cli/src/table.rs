//! Table and JSON output for the non-interactive subcommands.

use anyhow::{Context, Result};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use pokedex_core::{api, ApiClient, Catalog, Creature, TypeFilter};

/// Width of a text stat bar at exactly the 200-point reference value.
const STAT_BAR_WIDTH: usize = 24;

/// Table row for the list subcommand
#[derive(Tabled)]
struct CreatureRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Height")]
    height: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

impl CreatureRow {
    fn new(creature: &Creature) -> Self {
        Self {
            id: format!("#{}", creature.padded_id()),
            name: creature.display_name(),
            types: creature.type_names().collect::<Vec<_>>().join(", "),
            height: format!("{:.1} m", creature.height_m()),
            weight: format!("{:.1} kg", creature.weight_kg()),
        }
    }
}

fn creature_json(creature: &Creature) -> serde_json::Value {
    serde_json::json!({
        "id": creature.id,
        "name": creature.name,
        "types": creature.type_names().collect::<Vec<_>>(),
        "height_m": creature.height_m(),
        "weight_kg": creature.weight_kg(),
        "base_experience": creature.base_experience,
        "abilities": creature
            .abilities
            .iter()
            .map(|slot| slot.ability.name.as_str())
            .collect::<Vec<_>>(),
        "stats": creature
            .stats
            .iter()
            .map(|slot| serde_json::json!({"name": slot.stat.name, "value": slot.base_stat}))
            .collect::<Vec<_>>(),
        "sprite": api::sprite_url(creature.id),
        "artwork": api::artwork_url(creature.id),
    })
}

/// Fetch up to `limit` records, apply the filter engine and print the
/// result. Failed fetches are logged and simply missing from the output.
pub async fn list(
    client: &ApiClient,
    limit: u32,
    type_tag: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    println!("Fetching up to {limit} records...");

    let mut catalog = Catalog::new();
    catalog.fetch_up_to(client, limit).await;

    if let Some(tag) = type_tag {
        catalog.set_type_filter(TypeFilter::Only(tag));
    }
    catalog.refresh_view(search.as_deref().unwrap_or(""));

    let visible = catalog.visible();
    if visible.is_empty() {
        println!("\nNo records matched.");
        return Ok(());
    }

    if json {
        let records: Vec<_> = visible.iter().map(|c| creature_json(c)).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let rows: Vec<CreatureRow> = visible.iter().map(|c| CreatureRow::new(c)).collect();
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("\n{table}");
    println!(
        "\n{} of {} loaded record(s) shown.",
        visible.len(),
        catalog.loaded_len()
    );

    Ok(())
}

/// Fetch one record and print the detail projection.
pub async fn show(client: &ApiClient, id: u32, json: bool) -> Result<()> {
    let creature = client
        .fetch_creature(id)
        .await
        .context("record fetch failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&creature_json(&creature))?);
        return Ok(());
    }

    println!("{} #{}", creature.display_name(), creature.padded_id());
    println!("Types: {}", creature.type_names().collect::<Vec<_>>().join(", "));
    println!(
        "Height: {:.1} m   Weight: {:.1} kg   Base experience: {}",
        creature.height_m(),
        creature.weight_kg(),
        creature
            .base_experience
            .map_or_else(|| "-".to_string(), |xp| xp.to_string())
    );
    println!(
        "Abilities: {}",
        creature
            .abilities
            .iter()
            .map(|slot| slot.ability.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("Stats:");
    for slot in &creature.stats {
        println!(
            "  {:<16} {:>3}  {}",
            slot.stat.name,
            slot.base_stat,
            stat_bar(slot.base_stat)
        );
    }

    println!("Artwork: {}", api::artwork_url(creature.id));

    Ok(())
}

/// Proportional text bar: full width at 200. Values above 200 overrun the
/// nominal width on purpose; nothing is clamped.
fn stat_bar(value: u32) -> String {
    let filled = (f64::from(value) / 200.0 * STAT_BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}
