use linebridge::geo::{
    MAJOR_CITIES, OVERSEAS, Precision, classify_region, coordinate_precision, haversine_km,
    nearest_city, venue_category,
};

#[test]
fn central_boxes_win_over_wider_ones() {
    // Inside both the Central Tokyo box and the wider Tokyo Area box;
    // the more specific box is registered first, so it wins.
    let info = classify_region(35.68, 139.76);
    assert_eq!(info.region, "Central Tokyo");
    assert_eq!(info.area, "Greater Tokyo");

    // Inside the Tokyo Area box only.
    let info = classify_region(35.9, 139.2);
    assert_eq!(info.region, "Tokyo Area");
}

#[test]
fn each_registered_region_classifies() {
    assert_eq!(classify_region(34.7, 135.5).region, "Osaka City");
    assert_eq!(classify_region(35.2, 139.6).region, "Yokohama");
    assert_eq!(classify_region(35.15, 136.9).region, "Nagoya Area");
    assert_eq!(classify_region(33.6, 130.4).region, "Fukuoka Area");
    assert_eq!(classify_region(43.1, 141.35).region, "Sapporo Area");
    assert_eq!(classify_region(26.2, 127.7).region, "Naha Area");
    assert_eq!(classify_region(44.0, 143.0).region, "Hokkaido");
    assert_eq!(classify_region(24.5, 124.0).region, "Okinawa");
    assert_eq!(classify_region(36.5, 138.0).region, "Japan");
}

#[test]
fn coordinates_outside_every_box_are_overseas() {
    assert_eq!(classify_region(51.5074, -0.1278), OVERSEAS);
    assert_eq!(classify_region(40.7128, -74.0060), OVERSEAS);
    assert_eq!(classify_region(-33.8688, 151.2093), OVERSEAS);
}

#[test]
fn distance_to_self_is_zero() {
    for &(_, lat, lng) in MAJOR_CITIES {
        assert_eq!(haversine_km(lat, lng, lat, lng), 0.0);
    }
}

#[test]
fn tokyo_to_osaka_distance_is_plausible() {
    // Straight-line distance is roughly 400km.
    let km = haversine_km(35.6762, 139.6503, 34.6937, 135.5023);
    assert!((390.0..420.0).contains(&km), "got {km}");
}

#[test]
fn city_at_its_own_coordinates_is_its_own_nearest() {
    for &(name, lat, lng) in MAJOR_CITIES {
        let (nearest, distance) = nearest_city(lat, lng).unwrap();
        assert_eq!(nearest, name);
        assert_eq!(distance, 0.0);
    }
}

#[test]
fn nearest_city_picks_the_minimum() {
    // Just outside Kyoto; Kyoto beats Osaka and Kobe.
    let (nearest, distance) = nearest_city(35.02, 135.76).unwrap();
    assert_eq!(nearest, "Kyoto");
    assert!(distance < 5.0);
}

#[test]
fn precision_grades_by_decimal_digits() {
    assert_eq!(coordinate_precision(35.67621, 139.65031), Precision::High);
    assert_eq!(coordinate_precision(35.676, 139.650_5), Precision::Medium);
    assert_eq!(coordinate_precision(35.6, 139.6), Precision::Low);
    assert_eq!(coordinate_precision(35.0, 139.0), Precision::VeryLow);
    // The coarser axis decides.
    assert_eq!(coordinate_precision(35.67621, 139.6), Precision::Low);
}

#[test]
fn venue_categories_match_keywords() {
    assert_eq!(venue_category("Shinjuku Station", ""), Some("Transit"));
    assert_eq!(venue_category("Blue Bottle Cafe", ""), Some("Restaurant"));
    assert_eq!(venue_category("", "Park Hyatt Hotel"), Some("Hotel"));
    assert_eq!(venue_category("Ueno Zoo", ""), Some("Park & Leisure"));
    assert_eq!(venue_category("City General Hospital", ""), Some("Medical"));
    assert_eq!(venue_category("Keio University", ""), Some("School"));
    assert_eq!(venue_category("Don Quijote Store", ""), Some("Shopping"));
    assert_eq!(venue_category("Somewhere", "Nowhere"), None);
}
