use wirekit_core::validator::{check_compatibility, validate_circuit};
use wirekit_core::{Catalog, Circuit, ConnectionStatus, Endpoint, Point, RouteMode};

fn place(circuit: &mut Circuit, catalog: &Catalog, module_id: &str) -> String {
    let module = catalog.module(module_id).expect("builtin module").clone();
    circuit.add_component(module, Point::default())
}

#[test]
fn test_five_volts_into_esp32_range_is_incompatible() {
    // ESP32 operating range is 3.0-3.6V; a 5V supply must be rejected and
    // the reason must name both the range and the offending voltage.
    let mut catalog = Catalog::builtin();
    let mut supply = catalog.module("esp32-wroom-32").unwrap().clone();
    supply.id = "rail-5v".to_string();
    supply.name = "5V Rail".to_string();
    supply.ports[0].voltage = Some(5.0);
    catalog.push(supply);

    let mut circuit = Circuit::new();
    let rail = place(&mut circuit, &catalog, "rail-5v");
    let esp = place(&mut circuit, &catalog, "esp32-wroom-32");
    circuit
        .add_connection(
            Endpoint::new(rail, "p1"), // 3V3 port re-rated to 5V above
            Endpoint::new(esp, "p3"),  // VIN (power_in)
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    let modules: Vec<_> = circuit.components().cloned().collect();
    let conn = circuit.connections().next().unwrap();
    let verdict = check_compatibility(conn, &modules);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("3V-3.6V"), "reason: {}", verdict.reason);
    assert!(verdict.reason.contains("5V"), "reason: {}", verdict.reason);
}

#[test]
fn test_ground_to_ground_is_unconditionally_compatible() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let esp = place(&mut circuit, &catalog, "esp32-wroom-32");
    let imu = place(&mut circuit, &catalog, "lsm6ds3tr-c");
    circuit
        .add_connection(
            Endpoint::new(esp, "p2"),
            Endpoint::new(imu, "p2"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    let modules: Vec<_> = circuit.components().cloned().collect();
    let verdict = check_compatibility(circuit.connections().next().unwrap(), &modules);
    assert!(verdict.compatible);
    assert_eq!(verdict.reason, "GND connection is valid.");
}

#[test]
fn test_in_range_supply_is_compatible() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let esp = place(&mut circuit, &catalog, "esp32-wroom-32");
    let imu = place(&mut circuit, &catalog, "lsm6ds3tr-c");
    // ESP32 3V3 (3.3V power_out) into IMU VDD (power_in, range 1.71-3.6V)
    circuit
        .add_connection(
            Endpoint::new(esp, "p1"),
            Endpoint::new(imu, "p1"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    let modules: Vec<_> = circuit.components().cloned().collect();
    let verdict = check_compatibility(circuit.connections().next().unwrap(), &modules);
    assert!(verdict.compatible, "reason: {}", verdict.reason);
}

#[test]
fn test_validate_circuit_writes_statuses_and_counts() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let esp = place(&mut circuit, &catalog, "esp32-wroom-32");
    let imu = place(&mut circuit, &catalog, "lsm6ds3tr-c");

    // ok: GND-GND
    circuit
        .add_connection(
            Endpoint::new(esp.clone(), "p2"),
            Endpoint::new(imu.clone(), "p2"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();
    // incompatible: GND to SDA
    circuit
        .add_connection(
            Endpoint::new(esp, "p2"),
            Endpoint::new(imu.clone(), "p4"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    let incompatible = validate_circuit(&mut circuit);
    assert_eq!(incompatible, 1);

    let statuses: Vec<ConnectionStatus> = circuit.connections().map(|c| c.status).collect();
    assert_eq!(
        statuses,
        vec![ConnectionStatus::Ok, ConnectionStatus::Incompatible]
    );
}
