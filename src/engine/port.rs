// Port descriptors
//
// Static table of shipping ports shown as markers on the map. Loaded once
// and never mutated.

use super::bezier::Point;
use super::error::EngineError;
use std::collections::HashSet;
use std::fmt;

/// Maximum number of port markers on one map
pub const MAX_PORTS: usize = 10;

/// Unique port identifier (e.g. "shanghai")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortId(String);

impl PortId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PortId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PortId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub country: String,
    pub x: f64,
    pub y: f64,
    pub description: String,
    pub shipments_label: String,
}

impl Port {
    pub fn new(
        id: &str,
        name: &str,
        country: &str,
        (x, y): (f64, f64),
        description: &str,
        shipments_label: &str,
    ) -> Self {
        Self {
            id: PortId::from(id),
            name: name.to_string(),
            country: country.to_string(),
            x,
            y,
            description: description.to_string(),
            shipments_label: shipments_label.to_string(),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `point` falls inside this port's marker
    ///
    /// The marker is an axis-aligned ellipse with half-extents `radius`
    /// in map units. Terminal cells are not square, so the caller sizes
    /// the radius from the current cell dimensions.
    pub fn contains(&self, point: Point, radius: (f64, f64)) -> bool {
        let (rx, ry) = radius;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (point.x - self.x) / rx;
        let dy = (point.y - self.y) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Check the port table: ids unique, at most `MAX_PORTS` entries
pub fn validate_ports(ports: Vec<Port>) -> Result<Vec<Port>, EngineError> {
    if ports.len() > MAX_PORTS {
        return Err(EngineError::TooManyPorts(ports.len()));
    }

    let mut seen = HashSet::new();
    for port in &ports {
        if !seen.insert(port.id.clone()) {
            return Err(EngineError::DuplicatePort(port.id.to_string()));
        }
    }

    Ok(ports)
}

/// Port hit by `point`, if any
///
/// When markers overlap, the one whose centre is nearest wins.
pub fn port_at(ports: &[Port], point: Point, radius: (f64, f64)) -> Option<&Port> {
    ports
        .iter()
        .filter(|p| p.contains(point, radius))
        .min_by(|a, b| {
            let da = (a.x - point.x).powi(2) + (a.y - point.y).powi(2);
            let db = (b.x - point.x).powi(2) + (b.y - point.y).powi(2);
            da.total_cmp(&db)
        })
}

/// Ports along the China to India corridor
pub fn default_ports() -> Vec<Port> {
    vec![
        Port::new(
            "shanghai",
            "Shanghai",
            "China",
            (380.0, 120.0),
            "Export hub for electronics, machinery and textiles",
            "1,200+ shipments / year",
        ),
        Port::new(
            "shenzhen",
            "Shenzhen",
            "China",
            (362.0, 168.0),
            "Consumer electronics and components consolidation",
            "850+ shipments / year",
        ),
        Port::new(
            "singapore",
            "Singapore",
            "Singapore",
            (318.0, 232.0),
            "Transshipment gateway between East and South Asia",
            "400+ transits / year",
        ),
        Port::new(
            "chennai",
            "Chennai",
            "India",
            (222.0, 212.0),
            "Automotive parts and industrial goods import",
            "600+ shipments / year",
        ),
        Port::new(
            "mumbai",
            "Mumbai",
            "India",
            (180.0, 180.0),
            "Primary import gateway for West India distribution",
            "1,000+ shipments / year",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports_are_valid() {
        let ports = validate_ports(default_ports()).unwrap();
        assert!(ports.len() <= MAX_PORTS);
        assert!(ports.iter().any(|p| p.id.as_str() == "shanghai"));
        assert!(ports.iter().any(|p| p.id.as_str() == "mumbai"));
    }

    #[test]
    fn test_duplicate_port_rejected() {
        let mut ports = default_ports();
        ports.push(ports[0].clone());
        assert_eq!(
            validate_ports(ports),
            Err(EngineError::DuplicatePort("shanghai".to_string()))
        );
    }

    #[test]
    fn test_too_many_ports_rejected() {
        let ports: Vec<Port> = (0..=MAX_PORTS)
            .map(|i| Port::new(&format!("p{i}"), "P", "X", (i as f64, 0.0), "", ""))
            .collect();
        assert_eq!(
            validate_ports(ports),
            Err(EngineError::TooManyPorts(MAX_PORTS + 1))
        );
    }

    #[test]
    fn test_contains_ellipse() {
        let port = Port::new("a", "A", "X", (100.0, 100.0), "", "");
        assert!(port.contains(Point::new(100.0, 100.0), (10.0, 5.0)));
        assert!(port.contains(Point::new(109.0, 100.0), (10.0, 5.0)));
        assert!(!port.contains(Point::new(100.0, 106.0), (10.0, 5.0)));
        assert!(!port.contains(Point::new(100.0, 100.0), (0.0, 5.0)));
    }

    #[test]
    fn test_port_at_prefers_nearest() {
        let ports = vec![
            Port::new("a", "A", "X", (100.0, 100.0), "", ""),
            Port::new("b", "B", "X", (108.0, 100.0), "", ""),
        ];
        let hit = port_at(&ports, Point::new(106.0, 100.0), (10.0, 10.0));
        assert_eq!(hit.map(|p| p.id.as_str()), Some("b"));
        assert!(port_at(&ports, Point::new(0.0, 0.0), (10.0, 10.0)).is_none());
    }

    #[test]
    fn test_port_id_display() {
        assert_eq!(PortId::from("mumbai").to_string(), "mumbai");
        assert_eq!(PortId::from(String::from("x")).as_str(), "x");
    }
}
