use crate::journey::StepType;

/// Marker symbols used by the flowchart, mirroring the charting vocabulary
/// the figure was designed around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    Circle,
    Square,
    Diamond,
    Hexagon,
    Star,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct NodeStyle {
    pub color: &'static str,
    pub symbol: MarkerSymbol,
    pub size: f64,
}

impl StepType {
    /// Static per-type visual style table.
    pub fn style(self) -> NodeStyle {
        match self {
            StepType::Entry => NodeStyle {
                color: "#1FB8CD",
                symbol: MarkerSymbol::Circle,
                size: 25.0,
            },
            StepType::BotResponse => NodeStyle {
                color: "#DB4545",
                symbol: MarkerSymbol::Square,
                size: 25.0,
            },
            StepType::Decision => NodeStyle {
                color: "#2E8B57",
                symbol: MarkerSymbol::Diamond,
                size: 30.0,
            },
            StepType::Feature => NodeStyle {
                color: "#5D878F",
                symbol: MarkerSymbol::Hexagon,
                size: 25.0,
            },
            StepType::AiProcess => NodeStyle {
                color: "#D2BA4C",
                symbol: MarkerSymbol::Star,
                size: 30.0,
            },
            StepType::Action => NodeStyle {
                color: "#B4413C",
                symbol: MarkerSymbol::Square,
                size: 25.0,
            },
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            StepType::Entry => "Entry Point",
            StepType::BotResponse => "Bot Response",
            StepType::Decision => "Decision",
            StepType::Feature => "Feature/Tool",
            StepType::AiProcess => "AI Process",
            StepType::Action => "User Action",
        }
    }
}

/// Legend rows in display order.
pub const LEGEND_ITEMS: [StepType; 6] = [
    StepType::Entry,
    StepType::BotResponse,
    StepType::Decision,
    StepType::Feature,
    StepType::AiProcess,
    StepType::Action,
];
