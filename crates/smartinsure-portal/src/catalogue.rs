//! Mock catalogue behind the portal views
//!
//! Every figure here is fixed demo content: the policies on the dashboard,
//! the claims history, the coaching actions and the marketing copy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use smartinsure_common::{
    Claim, ClaimStatus, CoachingAction, Policy, PolicyKind, PolicyStatus, Priority,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// A headline figure with its caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Card with a title, blurb and optional figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// Landing page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub brand: String,
    pub tagline: String,
    pub badge: String,
    pub headline: String,
    pub description: String,
    pub hero_stats: Vec<Stat>,
    pub features: Vec<FeatureCard>,
    pub call_to_action: String,
    pub trust_stats: Vec<Stat>,
}

pub fn home() -> HomeContent {
    HomeContent {
        brand: "SmartInsure AI".into(),
        tagline: "Intelligent Insurance Solutions".into(),
        badge: "AI-Powered Insurance Platform".into(),
        headline: "Insurance Reimagined".into(),
        description: "Experience the future of insurance with AI-driven risk assessment, \
                      instant approvals, and personalized coverage that adapts to your life."
            .into(),
        hero_stats: vec![
            Stat::new("30s", "Average Quote Time"),
            Stat::new("24/7", "AI Claims Processing"),
            Stat::new("99.9%", "Uptime Guarantee"),
        ],
        features: vec![
            FeatureCard {
                title: "Dynamic Risk Profiling".into(),
                description: "AI analyzes 50+ data points to create your unique risk profile"
                    .into(),
                highlights: vec!["Accuracy 98.5%".into()],
            },
            FeatureCard {
                title: "Real-time Approval".into(),
                description: "Get instant policy approval and claims processing".into(),
                highlights: vec!["Average: 2.3 seconds".into()],
            },
            FeatureCard {
                title: "Custom Policies".into(),
                description: "Tailored coverage based on your unique lifestyle".into(),
                highlights: vec!["Auto".into(), "Home".into(), "Health".into(), "Life".into()],
            },
        ],
        call_to_action: "Join thousands of customers who trust our AI-powered insurance \
                         platform. Get your personalized quote in under 3 minutes."
            .into(),
        trust_stats: vec![
            Stat::new("$2.3B+", "Claims Processed"),
            Stat::new("4.9/5", "Customer Rating"),
        ],
    }
}

pub fn policies() -> Vec<Policy> {
    vec![
        Policy {
            id: 1,
            kind: PolicyKind::Auto,
            subject: "2020 Honda Accord".into(),
            monthly_premium: dec!(89),
            status: PolicyStatus::Active,
            next_payment: date(2024, 1, 15),
            coverage_percent: 85,
        },
        Policy {
            id: 2,
            kind: PolicyKind::Home,
            subject: "123 Main St, CA".into(),
            monthly_premium: dec!(156),
            status: PolicyStatus::Active,
            next_payment: date(2024, 1, 20),
            coverage_percent: 92,
        },
        Policy {
            id: 3,
            kind: PolicyKind::Life,
            subject: "$500,000 Term".into(),
            monthly_premium: dec!(45),
            status: PolicyStatus::Pending,
            next_payment: date(2024, 1, 10),
            coverage_percent: 0,
        },
    ]
}

/// Dashboard recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub detail: String,
}

pub fn recommendations() -> Vec<Recommendation> {
    [
        (
            "Bundle Discount Available",
            "Save 15% by bundling your auto and home insurance",
        ),
        (
            "Coverage Gap Detected",
            "Consider adding umbrella insurance for additional protection",
        ),
        (
            "Safe Driver Reward",
            "Your driving score improved! You qualify for a 10% discount",
        ),
    ]
    .into_iter()
    .map(|(title, detail)| Recommendation {
        title: title.into(),
        detail: detail.into(),
    })
    .collect()
}

/// Claims paid year to date, shown on the dashboard
pub const CLAIMS_PAID_YTD: Decimal = dec!(15000);

pub fn claims() -> Vec<Claim> {
    vec![
        Claim {
            id: "CLM-2024-001".into(),
            kind: "Auto Accident".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10),
            amount: dec!(3500),
            status: ClaimStatus::Approved,
            progress: 100,
            description: String::new(),
        },
        Claim {
            id: "CLM-2024-002".into(),
            kind: "Windshield Damage".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15),
            amount: dec!(450),
            status: ClaimStatus::Processing,
            progress: 75,
            description: String::new(),
        },
        Claim {
            id: "CLM-2024-003".into(),
            kind: "Home Water Damage".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 18),
            amount: dec!(1200),
            status: ClaimStatus::UnderReview,
            progress: 25,
            description: String::new(),
        },
    ]
}

/// Static service figures on the claims portal
pub fn claims_service_stats() -> Vec<Stat> {
    vec![
        Stat::new("2.1 days", "Avg. Processing Time"),
        Stat::new("98%", "Customer Satisfaction"),
    ]
}

pub fn coaching_actions() -> Vec<CoachingAction> {
    vec![
        CoachingAction {
            id: 1,
            category: "Vehicle Maintenance".into(),
            action: "Replace worn tires (tread depth < 4/32\")".into(),
            impact: "Reduce accident risk by 12%".into(),
            discount: dec!(8.50),
            priority: Priority::High,
            timeframe: "2 weeks".into(),
        },
        CoachingAction {
            id: 2,
            category: "Driving Behavior".into(),
            action: "Complete defensive driving course".into(),
            impact: "Lower premium tier qualification".into(),
            discount: dec!(15.00),
            priority: Priority::Medium,
            timeframe: "1 month".into(),
        },
        CoachingAction {
            id: 3,
            category: "Security".into(),
            action: "Install dash cam with AI monitoring".into(),
            impact: "Fraud protection & evidence".into(),
            discount: dec!(12.00),
            priority: Priority::Medium,
            timeframe: "1 week".into(),
        },
        CoachingAction {
            id: 4,
            category: "Health".into(),
            action: "Sync fitness tracker for health monitoring".into(),
            impact: "Qualify for wellness discounts".into(),
            discount: dec!(20.00),
            priority: Priority::Low,
            timeframe: "Immediate".into(),
        },
    ]
}

/// Fixed risk-profile panel on the coaching view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingInsights {
    pub overall_risk_score: u8,
    pub risk_improvement_percent: u8,
    pub summary: String,
    pub next_milestone: String,
    pub insight: String,
}

pub fn coaching_insights() -> CoachingInsights {
    CoachingInsights {
        overall_risk_score: 85,
        risk_improvement_percent: 85,
        summary: "Excellent! You're in the top 15% of safe drivers in your area.".into(),
        next_milestone: "Complete 2 more actions to unlock \"Premium Driver\" status and \
                         save an additional $25/month."
            .into(),
        insight: "Your driving patterns show 95% correlation with our safest driver profiles."
            .into(),
    }
}
