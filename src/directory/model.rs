use serde::{Deserialize, Serialize};

/// Grouping used to organise the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SearchPortal,
    EcommerceMarketplace,
    SocialMessaging,
    StreamingMedia,
    Gaming,
    PaymentsFinance,
    CloudDevops,
    ProductivitySaas,
    TelecomIsp,
    GovernmentPublic,
    TransportTravel,
    EducationExam,
}

impl Category {
    /// Every category in the order lists are displayed.
    pub const DISPLAY_ORDER: [Category; 12] = [
        Category::SearchPortal,
        Category::SocialMessaging,
        Category::StreamingMedia,
        Category::Gaming,
        Category::EcommerceMarketplace,
        Category::PaymentsFinance,
        Category::CloudDevops,
        Category::ProductivitySaas,
        Category::TelecomIsp,
        Category::GovernmentPublic,
        Category::TransportTravel,
        Category::EducationExam,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::SearchPortal => "検索・ポータル",
            Category::EcommerceMarketplace => "EC・マーケット",
            Category::SocialMessaging => "SNS・メッセージ",
            Category::StreamingMedia => "動画・音楽",
            Category::Gaming => "ゲーム",
            Category::PaymentsFinance => "決済・金融",
            Category::CloudDevops => "クラウド・開発基盤",
            Category::ProductivitySaas => "業務・SaaS",
            Category::TelecomIsp => "通信・ISP",
            Category::GovernmentPublic => "官公庁・公共",
            Category::TransportTravel => "交通・旅行",
            Category::EducationExam => "教育・試験",
        }
    }
}

/// One well-known service. Only `url` is ever probed; the rest is
/// presentation metadata passed through to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// URL slug and stable identifier.
    pub id: String,
    pub name: String,
    /// The URL a check is run against.
    pub url: String,
    pub category: Category,
    /// Known failure patterns and caveats for this service.
    pub service_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_status_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_url: Option<String>,
    /// Alternative names people search for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl ServiceRecord {
    /// Case-insensitive match against id, name and aliases.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.id.to_lowercase().contains(&query)
            || self.name.to_lowercase().contains(&query)
            || self.aliases.iter().any(|a| a.to_lowercase().contains(&query))
    }
}
