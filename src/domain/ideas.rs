// src/domain/ideas.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentIdea {
    pub title: &'static str,
    pub difficulty: &'static str,
    pub target_audience: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
}

const fn idea(title: &'static str, difficulty: &'static str, audience: &'static str) -> ContentIdea {
    ContentIdea {
        title,
        difficulty,
        target_audience: audience,
        category: None,
    }
}

const IDEAS: &[(&str, [ContentIdea; 5])] = &[
    (
        "inheritance",
        [
            idea("遺產稅申報完全攻略", "中級", "一般民眾"),
            idea("拋棄繼承vs限定繼承：選擇策略分析", "進階", "有債務考量者"),
            idea("遺囑效力爭議案例解析", "專業", "法律從業者"),
            idea("數位遺產繼承新趨勢", "初級", "年輕世代"),
            idea("跨國遺產繼承實務指南", "專業", "海外資產持有者"),
        ],
    ),
    (
        "real-estate",
        [
            idea("預售屋契約陷阱解析", "中級", "首購族"),
            idea("不動產投資稅務規劃", "進階", "投資人"),
            idea("社區管理委員會法律問題", "中級", "住戶"),
            idea("都更權益保障指南", "進階", "都更戶"),
            idea("租賃新法重點解析", "初級", "房東房客"),
        ],
    ),
    (
        "family-law",
        [
            idea("離婚財產分配實務", "中級", "離婚當事人"),
            idea("子女監護權爭取策略", "進階", "父母"),
            idea("家暴保護令申請流程", "初級", "受害者"),
            idea("收養程序完整指南", "中級", "收養家庭"),
            idea("夫妻財產制選擇建議", "初級", "新婚夫妻"),
        ],
    ),
];

/// Ideas shown per category when no category is requested.
pub const SAMPLE_PER_CATEGORY: usize = 3;

/// All ideas for `category` when it has any; otherwise a sample from every
/// category, each tagged with its category.
pub fn suggest(category: Option<&str>) -> Vec<ContentIdea> {
    let known = category.and_then(|wanted| IDEAS.iter().find(|(key, _)| *key == wanted));
    if let Some((_, ideas)) = known {
        return ideas.to_vec();
    }

    IDEAS
        .iter()
        .flat_map(|(key, ideas)| {
            ideas.iter().take(SAMPLE_PER_CATEGORY).map(move |idea| ContentIdea {
                category: Some(*key),
                ..*idea
            })
        })
        .collect()
}
