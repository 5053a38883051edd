use std::process::ExitCode;

use anyhow::Context;

use wirekit::{init_logging, netlist, Catalog, Circuit, ConnectionStatus};

const USAGE: &str = "\
wirekit - circuit module editor tools

Usage:
  wirekit validate <circuit.json>   check every connection for compatibility
  wirekit netlist  <circuit.json>   print a SPICE-style netlist
  wirekit catalog                   list built-in catalog modules
  wirekit --version
";

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("validate") => {
            let path = args.get(1).context("validate: missing circuit file")?;
            validate(path)
        }
        Some("netlist") => {
            let path = args.get(1).context("netlist: missing circuit file")?;
            let circuit = load_circuit(path)?;
            print!("{}", netlist::export(&circuit));
            Ok(ExitCode::SUCCESS)
        }
        Some("catalog") => {
            catalog();
            Ok(ExitCode::SUCCESS)
        }
        Some("--version") | Some("-V") => {
            println!("wirekit {} (built {})", wirekit::VERSION, wirekit::BUILD_DATE);
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprint!("{USAGE}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_circuit(path: &str) -> anyhow::Result<Circuit> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    Circuit::from_json(&json).with_context(|| format!("parsing {path}"))
}

fn validate(path: &str) -> anyhow::Result<ExitCode> {
    let mut circuit = load_circuit(path)?;
    let incompatible = wirekit::validator::validate_circuit(&mut circuit);

    for conn in circuit.connections() {
        let from = endpoint_label(&circuit, &conn.from.instance_id, &conn.from.port_id);
        let to = endpoint_label(&circuit, &conn.to.instance_id, &conn.to.port_id);
        let status = match conn.status {
            ConnectionStatus::Ok => "ok",
            ConnectionStatus::Incompatible => "INCOMPATIBLE",
            ConnectionStatus::Pending => "pending",
        };
        println!("{status:>12}  {from} -> {to}");
    }
    println!(
        "{} connections, {} incompatible",
        circuit.connection_count(),
        incompatible
    );

    Ok(if incompatible > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn endpoint_label(circuit: &Circuit, instance_id: &str, port_id: &str) -> String {
    match circuit.component(instance_id) {
        Some(c) => {
            let port = c.port(port_id).map(|p| p.name.as_str()).unwrap_or(port_id);
            format!("{}.{}", c.name(), port)
        }
        None => format!("{instance_id}.{port_id}"),
    }
}

fn catalog() {
    let catalog = Catalog::builtin();
    for module in catalog.modules() {
        let [min, max] = module.operating_voltage;
        let range = if max == f64::MAX {
            "any voltage".to_string()
        } else {
            format!("{min}V-{max}V")
        };
        println!(
            "{:<24} {:<28} {} ports, {}",
            module.id,
            module.name,
            module.ports.len(),
            range
        );
    }
}
