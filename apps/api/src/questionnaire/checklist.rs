//! Investor checklist: the topics the extraction stage must try to populate.
//! Used only as prompt text; topic and field order is preserved when rendered.

pub struct ChecklistTopic {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

pub const INVESTOR_CHECKLIST: &[ChecklistTopic] = &[
    ChecklistTopic {
        name: "The Basics",
        fields: &["Company Name", "Website", "One-Liner"],
    },
    ChecklistTopic {
        name: "Problem & Solution",
        fields: &["Problem Statement", "Your Solution", "Unique Value Proposition"],
    },
    ChecklistTopic {
        name: "Team",
        fields: &["Founder Names & Roles", "Relevant Experience"],
    },
    ChecklistTopic {
        name: "Market Size",
        fields: &[
            "Total Addressable Market (TAM)",
            "Serviceable Addressable Market (SAM)",
            "Source of Market Data",
        ],
    },
    ChecklistTopic {
        name: "Traction & Metrics",
        fields: &[
            "Current Revenue (ARR/MRR)",
            "Month-over-Month Growth",
            "Number of Customers",
            "Key KPIs (e.g., Churn, MAU)",
        ],
    },
    ChecklistTopic {
        name: "Business Model",
        fields: &["How You Make Money", "Pricing Tiers"],
    },
    ChecklistTopic {
        name: "Unit Economics",
        fields: &[
            "Customer Acquisition Cost (CAC)",
            "Customer Lifetime Value (LTV)",
            "Gross Margin",
        ],
    },
    ChecklistTopic {
        name: "Competition",
        fields: &["Direct Competitors", "Your Competitive Advantage"],
    },
    ChecklistTopic {
        name: "Financials",
        fields: &[
            "Historical Financial Summary",
            "3-5 Year Projections",
            "Current Burn Rate & Runway",
        ],
    },
    ChecklistTopic {
        name: "The Ask",
        fields: &["Funding Amount Requested", "Valuation", "Use of Funds"],
    },
];

/// Renders the checklist as a JSON object literal, one topic per line.
pub fn render_checklist(topics: &[ChecklistTopic]) -> String {
    let lines: Vec<String> = topics
        .iter()
        .map(|topic| {
            let fields: Vec<String> = topic.fields.iter().map(|f| quote(f)).collect();
            format!("  {}: [{}]", quote(topic.name), fields.join(", "))
        })
        .collect();
    format!("{{\n{}\n}}", lines.join(",\n"))
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
