use wirekit_core::{netlist, Catalog, Circuit, Endpoint, Point, RouteMode};

fn place(circuit: &mut Circuit, catalog: &Catalog, module_id: &str) -> String {
    let module = catalog.module(module_id).expect("builtin module").clone();
    circuit.add_component(module, Point::default())
}

#[test]
fn test_empty_circuit_netlist() {
    let circuit = Circuit::new();
    let text = netlist::export(&circuit);
    assert!(text.starts_with("* wirekit netlist"));
    assert!(text.trim_end().ends_with(".end"));
}

#[test]
fn test_connected_ports_share_a_node() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let r = place(&mut circuit, &catalog, "res-1k");
    let c = place(&mut circuit, &catalog, "cap-100nf");
    circuit
        .add_connection(
            Endpoint::new(r, "p2"),
            Endpoint::new(c, "p1"),
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    let text = netlist::export(&circuit);
    let lines: Vec<&str> = text.lines().collect();
    // R1 <n1> <n2> ; ... and C2 <n3> <n4> ; ...
    let r_nodes: Vec<&str> = lines[1].split_whitespace().skip(1).take(2).collect();
    let c_nodes: Vec<&str> = lines[2].split_whitespace().skip(1).take(2).collect();
    assert_eq!(r_nodes[1], c_nodes[0], "connected ports must share a node");
    assert_ne!(r_nodes[0], c_nodes[1], "unconnected ports must not");
}

#[test]
fn test_ground_net_is_node_zero() {
    let catalog = Catalog::builtin();
    let mut circuit = Circuit::new();
    let esp = place(&mut circuit, &catalog, "esp32-wroom-32");
    let imu = place(&mut circuit, &catalog, "lsm6ds3tr-c");
    circuit
        .add_connection(
            Endpoint::new(esp, "p2"), // GND
            Endpoint::new(imu, "p2"), // GND
            Vec::new(),
            RouteMode::Curved,
        )
        .unwrap();

    let text = netlist::export(&circuit);
    // ESP32 card: X1 followed by 7 node numbers; GND is port 2.
    let esp_line = text.lines().nth(1).unwrap();
    let nodes: Vec<&str> = esp_line.split_whitespace().collect();
    assert_eq!(nodes[0], "X1");
    assert_eq!(nodes[2], "0", "ground port must sit on node 0: {}", esp_line);
}
