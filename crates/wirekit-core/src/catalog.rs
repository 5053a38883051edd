//! The module catalog.
//!
//! A flat, read-only list of catalog modules the editor can place. Ships
//! with a built-in set mirroring the stock library; user catalogs load from
//! JSON with the same schema.

use std::io::Read;
use std::path::Path;

use crate::error::{CircuitError, Error, Result};
use crate::model::{CatalogModule, ComponentKind, Port, PortKind, PortSide};

/// A collection of catalog modules, addressable by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<CatalogModule>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            modules: builtin_modules(),
        }
    }

    /// Loads a catalog from a JSON array of modules.
    pub fn from_json(json: &str) -> Result<Self> {
        let modules: Vec<CatalogModule> = serde_json::from_str(json)?;
        Ok(Self { modules })
    }

    /// Loads a catalog from any reader producing JSON.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterates all modules in catalog order.
    pub fn modules(&self) -> impl Iterator<Item = &CatalogModule> {
        self.modules.iter()
    }

    /// Looks up a module by catalog id.
    pub fn module(&self, id: &str) -> Option<&CatalogModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Looks up a module by catalog id, erroring when absent. Placement
    /// paths use this so a bad drop payload surfaces as a typed error.
    pub fn require(&self, id: &str) -> Result<&CatalogModule> {
        self.module(id).ok_or_else(|| {
            Error::from(CircuitError::UnknownModule {
                module_id: id.to_string(),
            })
        })
    }

    /// Adds a module to the catalog.
    pub fn push(&mut self, module: CatalogModule) {
        self.modules.push(module);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn port(id: &str, name: &str, kind: PortKind, voltage: Option<f64>, side: PortSide) -> Port {
    Port {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        voltage,
        side,
    }
}

/// The stock library: a couple of MCU/sensor modules plus basic passives.
fn builtin_modules() -> Vec<CatalogModule> {
    vec![
        CatalogModule {
            id: "esp32-wroom-32".to_string(),
            name: "ESP32-WROOM-32".to_string(),
            kind: ComponentKind::Module,
            manufacturer: Some("Espressif Systems".to_string()),
            part_number: Some("ESP32-WROOM-32".to_string()),
            description: "Wi-Fi + BT + BLE MCU module for a wide variety of applications."
                .to_string(),
            operating_voltage: [3.0, 3.6],
            ports: vec![
                port("p1", "3V3", PortKind::PowerOut, Some(3.3), PortSide::Left),
                port("p2", "GND", PortKind::Ground, None, PortSide::Left),
                port("p3", "VIN", PortKind::PowerIn, None, PortSide::Left),
                port("p4", "GPIO21 (SDA)", PortKind::DataIo, None, PortSide::Right),
                port("p5", "GPIO22 (SCL)", PortKind::DataIo, None, PortSide::Right),
                port("p6", "GPIO16 (TX2)", PortKind::DataIo, None, PortSide::Right),
                port("p7", "GPIO17 (RX2)", PortKind::DataIo, None, PortSide::Right),
            ],
            tags: vec!["microcontroller".into(), "wifi".into(), "bluetooth".into()],
        },
        CatalogModule {
            id: "lsm6ds3tr-c".to_string(),
            name: "LSM6DS3TR-C".to_string(),
            kind: ComponentKind::Module,
            manufacturer: Some("STMicroelectronics".to_string()),
            part_number: Some("LSM6DS3TR-C".to_string()),
            description: "6-axis IMU with 3D accelerometer + 3D gyroscope, I2C/SPI interface."
                .to_string(),
            operating_voltage: [1.71, 3.6],
            ports: vec![
                port("p1", "VDD", PortKind::PowerIn, None, PortSide::Left),
                port("p2", "GND", PortKind::Ground, None, PortSide::Left),
                port("p3", "SCL", PortKind::DataIo, None, PortSide::Right),
                port("p4", "SDA", PortKind::DataIo, None, PortSide::Right),
            ],
            tags: vec!["imu".into(), "accelerometer".into(), "gyroscope".into()],
        },
        CatalogModule {
            id: "pca9685-servo-shield".to_string(),
            name: "16-Channel 12-Bit PWM/Servo Shield".to_string(),
            kind: ComponentKind::Module,
            manufacturer: Some("Adafruit".to_string()),
            part_number: Some("PCA9685".to_string()),
            description: "16 independent 12-bit PWM outputs for servos or LEDs over I2C."
                .to_string(),
            operating_voltage: [3.0, 5.0],
            ports: vec![
                port("p1", "VCC", PortKind::PowerIn, None, PortSide::Left),
                port("p2", "GND", PortKind::Ground, None, PortSide::Left),
                port("p3", "SCL", PortKind::DataIo, None, PortSide::Right),
                port("p4", "SDA", PortKind::DataIo, None, PortSide::Right),
            ],
            tags: vec!["shield".into(), "pwm_controller".into()],
        },
        CatalogModule {
            id: "res-1k".to_string(),
            name: "1k\u{2126} Resistor".to_string(),
            kind: ComponentKind::Resistor,
            manufacturer: None,
            part_number: None,
            description: String::new(),
            operating_voltage: [0.0, f64::MAX],
            ports: vec![
                port("p1", "1", PortKind::DataIo, None, PortSide::Left),
                port("p2", "2", PortKind::DataIo, None, PortSide::Right),
            ],
            tags: vec!["passive".into()],
        },
        CatalogModule {
            id: "cap-100nf".to_string(),
            name: "100nF Capacitor".to_string(),
            kind: ComponentKind::Capacitor,
            manufacturer: None,
            part_number: None,
            description: String::new(),
            operating_voltage: [0.0, f64::MAX],
            ports: vec![
                port("p1", "1", PortKind::DataIo, None, PortSide::Left),
                port("p2", "2", PortKind::DataIo, None, PortSide::Right),
            ],
            tags: vec!["passive".into()],
        },
        CatalogModule {
            id: "led-red".to_string(),
            name: "Red LED".to_string(),
            kind: ComponentKind::Ic,
            manufacturer: None,
            part_number: None,
            description: String::new(),
            operating_voltage: [1.8, 2.2],
            ports: vec![
                port("p1", "A", PortKind::PowerIn, None, PortSide::Left),
                port("p2", "C", PortKind::Ground, None, PortSide::Right),
            ],
            tags: vec!["led".into()],
        },
    ]
}
