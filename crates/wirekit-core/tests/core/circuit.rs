use wirekit_core::{Catalog, Circuit, Endpoint, Point, RouteMode};

fn place(circuit: &mut Circuit, catalog: &Catalog, module_id: &str, x: f64, y: f64) -> String {
    let module = catalog.module(module_id).expect("builtin module").clone();
    circuit.add_component(module, Point::new(x, y))
}

#[test]
fn test_add_component_assigns_unique_ids() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let a = place(&mut circuit, &catalog, "res-1k", 0.0, 0.0);
    let b = place(&mut circuit, &catalog, "res-1k", 100.0, 0.0);
    assert_ne!(a, b);
    assert_eq!(circuit.component_count(), 2);
}

#[test]
fn test_update_component_position() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let id = place(&mut circuit, &catalog, "cap-100nf", 10.0, 20.0);

    circuit
        .update_component_position(&id, Point::new(42.0, 24.0))
        .unwrap();
    let pos = circuit.component(&id).unwrap().position;
    assert!((pos.x - 42.0).abs() < 1e-9);
    assert!((pos.y - 24.0).abs() < 1e-9);
}

#[test]
fn test_update_position_of_missing_component_errors() {
    let mut circuit = Circuit::new();
    assert!(circuit
        .update_component_position("ghost", Point::default())
        .is_err());
}

#[test]
fn test_add_connection_requires_resolvable_endpoints() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let a = place(&mut circuit, &catalog, "esp32-wroom-32", 0.0, 0.0);

    // Missing component
    let err = circuit.add_connection(
        Endpoint::new(a.clone(), "p1"),
        Endpoint::new("ghost", "p1"),
        Vec::new(),
        RouteMode::Curved,
    );
    assert!(err.is_err());

    // Missing port
    let b = place(&mut circuit, &catalog, "lsm6ds3tr-c", 300.0, 0.0);
    let err = circuit.add_connection(
        Endpoint::new(a, "p1"),
        Endpoint::new(b, "p99"),
        Vec::new(),
        RouteMode::Curved,
    );
    assert!(err.is_err());
}

#[test]
fn test_self_connection_rejected() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let a = place(&mut circuit, &catalog, "esp32-wroom-32", 0.0, 0.0);
    let err = circuit.add_connection(
        Endpoint::new(a.clone(), "p1"),
        Endpoint::new(a, "p2"),
        Vec::new(),
        RouteMode::Curved,
    );
    assert!(err.is_err());
}

#[test]
fn test_remove_component_cascades_to_connections() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let esp = place(&mut circuit, &catalog, "esp32-wroom-32", 0.0, 0.0);
    let imu = place(&mut circuit, &catalog, "lsm6ds3tr-c", 300.0, 0.0);
    let shield = place(&mut circuit, &catalog, "pca9685-servo-shield", 0.0, 300.0);

    circuit
        .add_connection(
            Endpoint::new(esp.clone(), "p1"),
            Endpoint::new(imu.clone(), "p1"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();
    circuit
        .add_connection(
            Endpoint::new(esp.clone(), "p2"),
            Endpoint::new(imu.clone(), "p2"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();
    let unrelated = circuit
        .add_connection(
            Endpoint::new(imu.clone(), "p3"),
            Endpoint::new(shield, "p3"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    let cascaded = circuit.remove_component(&esp).unwrap();
    assert_eq!(cascaded, 2);
    assert_eq!(circuit.connection_count(), 1);
    assert!(circuit.connection(&unrelated).is_some());

    // Invariant: every surviving endpoint still resolves.
    for conn in circuit.connections() {
        assert!(circuit.component(&conn.from.instance_id).is_some());
        assert!(circuit.component(&conn.to.instance_id).is_some());
    }
}

#[test]
fn test_remove_connection() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let a = place(&mut circuit, &catalog, "res-1k", 0.0, 0.0);
    let b = place(&mut circuit, &catalog, "cap-100nf", 100.0, 0.0);
    let id = circuit
        .add_connection(
            Endpoint::new(a, "p2"),
            Endpoint::new(b, "p1"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    circuit.remove_connection(&id).unwrap();
    assert_eq!(circuit.connection_count(), 0);
    assert!(circuit.remove_connection(&id).is_err());
}

#[test]
fn test_json_round_trip_preserves_graph() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let a = place(&mut circuit, &catalog, "esp32-wroom-32", 12.5, 40.0);
    let b = place(&mut circuit, &catalog, "lsm6ds3tr-c", 250.0, 40.0);
    circuit
        .add_connection(
            Endpoint::new(a, "p1"),
            Endpoint::new(b, "p1"),
            vec![Point::new(200.0, 50.0)],
            RouteMode::Orthogonal,
        )
        .unwrap();

    let json = circuit.to_json().unwrap();
    let restored = Circuit::from_json(&json).unwrap();
    assert_eq!(restored.component_count(), 2);
    assert_eq!(restored.connection_count(), 1);
    let conn = restored.connections().next().unwrap();
    assert_eq!(conn.waypoints.len(), 1);
    assert_eq!(conn.mode, RouteMode::Orthogonal);
}

#[test]
fn test_load_rejects_dangling_endpoints() {
    // Hand-built JSON whose connection references a missing component.
    let json = r#"{
        "components": [],
        "connections": [{
            "id": "c1",
            "from": { "instance_id": "ghost", "port_id": "p1" },
            "to": { "instance_id": "ghost2", "port_id": "p1" },
            "mode": "curved"
        }]
    }"#;
    assert!(Circuit::from_json(json).is_err());
}
