use airfoilcore::export::DEFAULT_CHORD;
use airfoilcore::Airfoil;
use serde::{Deserialize, Serialize};

/// One plotted contour, closed so the chart draws the trailing edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlotTrace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PlotTrace {
    pub fn new(name: &str, airfoil: &Airfoil) -> Self {
        let coords = airfoil.get_coords(true);
        Self {
            name: name.to_string(),
            x: coords.iter().map(|p| p.x).collect(),
            y: coords.iter().map(|p| p.y).collect(),
        }
    }
}

/// Query string shared by the plot and download routes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Selection {
    /// Comma-separated catalog names.
    pub files: String,
    /// DXF chord for downloads.
    pub size: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            files: String::new(),
            size: DEFAULT_CHORD,
        }
    }
}

impl Selection {
    pub fn names(&self) -> Vec<&str> {
        self.files
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use airfoilcore::Point;

    #[test]
    fn selection_ignores_blank_names() {
        let selection = Selection {
            files: " naca0012, ,naca2412,".into(),
            ..Default::default()
        };
        assert_eq!(selection.names(), ["naca0012", "naca2412"]);
        assert!(Selection::default().names().is_empty());
    }

    #[test]
    fn trace_is_closed() {
        let airfoil = Airfoil::new(
            "t",
            vec![Point::new(1.0, 0.0), Point::new(0.0, 0.0), Point::new(1.0, -0.01)],
        )
        .unwrap();
        let trace = PlotTrace::new("t", &airfoil);
        assert_eq!(trace.x, [1.0, 0.0, 1.0, 1.0]);
        assert_eq!(trace.y, [0.0, 0.0, -0.01, 0.0]);
    }
}
