mod common;

use garagenav_lib::error::Error;
use garagenav_lib::{VehicleCatalog, VehicleType};

use common::{fixtures_dir, TestEnv};

const HEADER: &str = "name,type,mass_kg,engine_power_hp,drag_coefficient,frontal_area_m2,max_speed_mps,acceleration_mps2\n";

#[test]
fn loads_fixture_catalog_and_lists_vehicles() {
    let path = fixtures_dir().join("vehicle_data.csv");
    let catalog = VehicleCatalog::from_path(&path).expect("fixture should load");

    assert_eq!(
        catalog.vehicle_names(),
        vec!["Lightning GT", "Thunder Truck", "Velocity Viper"]
    );
    assert_eq!(catalog.source_path(), Some(path.as_path()));

    let truck = catalog.get("thunder truck").expect("truck present");
    assert_eq!(truck.kind, VehicleType::Truck);
    assert_eq!(truck.mass_kg, 2500.0);
}

#[test]
fn fixture_matches_builtin_roster() {
    let loaded = VehicleCatalog::from_path(&fixtures_dir().join("vehicle_data.csv")).unwrap();
    let builtin = VehicleCatalog::builtin();
    assert!(builtin.source_path().is_none());
    for (a, b) in loaded.vehicles_sorted().iter().zip(builtin.vehicles_sorted()) {
        assert_eq!(*a, b);
    }
}

#[test]
fn rejects_duplicate_names_case_insensitive() {
    let csv = HEADER.to_string()
        + "Roadster,classic,900,120,0.35,1.9,50,5\n"
        + "roadster,classic,950,125,0.35,1.9,51,5\n";

    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("should reject duplicates");
    match err {
        Error::DuplicateVehicleName { name } => assert_eq!(name, "roadster"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_invalid_numeric_values() {
    let csv = HEADER.to_string() + "Roadster,classic,-900,120,0.35,1.9,50,5\n";
    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("should reject mass");
    match err {
        Error::VehicleDataValidation { message } => assert!(message.contains("mass_kg")),
        other => panic!("unexpected error: {:?}", other),
    }

    let csv = HEADER.to_string() + "Roadster,classic,heavy,120,0.35,1.9,50,5\n";
    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("should reject text");
    assert!(err.to_string().contains("line 2"), "{err}");
}

#[test]
fn rejects_unknown_vehicle_type() {
    let csv = HEADER.to_string() + "Hover,hovercraft,900,120,0.35,1.9,50,5\n";
    let err = VehicleCatalog::from_reader(csv.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("hovercraft"));
}

#[test]
fn loads_catalog_from_scratch_file() {
    let env = TestEnv::new();
    let path = env.write(
        "bikes.csv",
        &(HEADER.to_string() + "Streak,motorcycle,200,180,0.6,0.6,80,10\n"),
    );
    let catalog = VehicleCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.resolve("streak").unwrap().kind, VehicleType::Motorcycle);
}

#[test]
fn unknown_vehicle_lists_suggestions() {
    let catalog = VehicleCatalog::builtin();
    let err = catalog.resolve("Lightnin GT").expect_err("unknown");
    let message = err.to_string();
    assert!(message.contains("Did you mean"), "{message}");
    assert!(message.contains("'Lightning GT'"), "{message}");
}
