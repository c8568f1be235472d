//! Location messages: classify the coordinates and answer with a card.

use serde_json::Value;
use tracing::info;

use crate::errors::BotError;
use crate::geo::{self, Precision, RegionInfo};
use crate::line::client::MessagingApi;
use crate::line::flex;

const DEFAULT_COLOR: &str = "#6C5CE7";

struct LocationAnalysis {
    region: RegionInfo,
    precision: Precision,
    venue: Option<&'static str>,
    nearest: Option<(&'static str, f64)>,
}

fn analyze(title: &str, address: &str, lat: f64, lng: f64) -> LocationAnalysis {
    LocationAnalysis {
        region: geo::classify_region(lat, lng),
        precision: geo::coordinate_precision(lat, lng),
        venue: geo::venue_category(title, address),
        nearest: geo::nearest_city(lat, lng),
    }
}

fn region_color(region: &RegionInfo) -> &'static str {
    match region.region {
        "Central Tokyo" | "Tokyo Area" | "Yokohama" => "#FF6B6B",
        "Osaka City" | "Osaka Area" => "#4ECDC4",
        "Nagoya Area" => "#45B7D1",
        "Fukuoka Area" => "#96CEB4",
        "Sapporo Area" | "Hokkaido" => "#FFEAA7",
        "Naha Area" | "Okinawa" => "#74B9FF",
        "Overseas" => "#A29BFE",
        _ => DEFAULT_COLOR,
    }
}

fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("~{:.0}m", km * 1000.0)
    } else {
        format!("~{km:.1}km")
    }
}

fn location_card(
    title: &str,
    address: &str,
    lat: f64,
    lng: f64,
    analysis: &LocationAnalysis,
) -> Value {
    let color = region_color(&analysis.region);

    let hero = flex::header("Location received", title, color);

    let mut contents = vec![
        flex::section_title("Basics", color),
        flex::separator(),
        flex::info_row("Address", address),
        flex::info_row("Coordinates", &format!("{lat}, {lng}")),
        flex::info_row("Precision", analysis.precision.label()),
        flex::section_title("Region", color),
        flex::separator(),
        flex::info_row("Region", analysis.region.region),
        flex::info_row("Area", analysis.region.area),
    ];
    if let Some(venue) = analysis.venue {
        contents.push(flex::info_row("Venue type", venue));
    }
    if let Some((city, km)) = analysis.nearest {
        contents.push(flex::info_row(
            "Nearest city",
            &format!("{city} ({})", format_distance(km)),
        ));
    }

    let footer = flex::footer(vec![
        flex::uri_button(
            "Open in Maps",
            &format!("https://maps.google.com/?q={lat},{lng}"),
            color,
        ),
        flex::note("Thanks for sharing your location!", color),
    ]);

    flex::message(
        &format!("Location: {title}"),
        flex::bubble(hero, flex::body(contents), Some(footer)),
    )
}

pub async fn handle(
    api: &dyn MessagingApi,
    reply_token: &str,
    title: Option<&str>,
    address: Option<&str>,
    lat: f64,
    lng: f64,
) -> Result<(), BotError> {
    let title = title.unwrap_or("Shared location");
    let address = address.unwrap_or("unknown address");

    let analysis = analyze(title, address, lat, lng);
    info!(
        region = analysis.region.region,
        nearest = analysis.nearest.map(|(city, _)| city),
        "location received"
    );

    let card = location_card(title, address, lat, lng, &analysis);
    api.reply(reply_token, vec![card]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_switch_units_below_one_km() {
        assert_eq!(format_distance(0.45), "~450m");
        assert_eq!(format_distance(3.21), "~3.2km");
    }

    #[test]
    fn overseas_gets_its_own_color() {
        let region = geo::classify_region(51.5, -0.12);
        assert_eq!(region_color(&region), "#A29BFE");
    }
}
