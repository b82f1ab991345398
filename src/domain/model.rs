use crate::utils::error::Result;
use crate::utils::validation::{validate_birth_date, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

/// 送出當下的表單欄位快照
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: Gender,
    pub nationality: String,
}

impl FormSnapshot {
    /// 驗證通過後轉成送往後端的請求內容
    pub fn into_request(self) -> Result<NameRequest> {
        self.validate()?;
        Ok(NameRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
            gender: self.gender,
            nationality: self.nationality.trim().to_string(),
        })
    }
}

impl Validate for FormSnapshot {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("first_name", &self.first_name)?;
        validate_non_empty_string("last_name", &self.last_name)?;
        validate_birth_date("birth_date", self.birth_date.trim())?;
        validate_non_empty_string("nationality", &self.nationality)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameRequest {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: Gender,
    pub nationality: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameOrigin {
    ClassicPoetry,
    ModernTrend,
    #[default]
    PhoneticCreative,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CulturalInsights {
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub name_origin: NameOrigin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunar_date: Option<String>,
    #[serde(default)]
    pub cultural_insights: CulturalInsights,
    #[serde(default)]
    pub poetry_references: Vec<String>,
}

impl NameResult {
    /// 卡片副標：有拼音用拼音，否則顯示評分
    pub fn subtitle(&self) -> String {
        if let Some(pinyin) = &self.pinyin {
            pinyin.clone()
        } else if let Some(score) = self.score {
            format!("評分 {:.1}", score)
        } else {
            String::new()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerateResponse {
    pub results: Vec<NameResult>,
}

/// 後端可能回傳排序後的候選列表，也可能是最早期的單一名字格式。
/// 統一轉成列表形式處理。
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Ranked { results: Vec<NameResult> },
    Legacy(LegacyResponse),
}

#[derive(Debug, Deserialize)]
pub struct LegacyResponse {
    pub chinese_name: String,
    #[serde(default, alias = "explanation")]
    pub meaning: Option<String>,
    #[serde(default)]
    pub poem_reference: Option<String>,
    #[serde(default)]
    pub lunar_date: Option<String>,
}

impl ApiResponse {
    pub fn normalize(self) -> GenerateResponse {
        match self {
            ApiResponse::Ranked { results } => GenerateResponse { results },
            ApiResponse::Legacy(legacy) => {
                let name_origin = if legacy.poem_reference.is_some() {
                    NameOrigin::ClassicPoetry
                } else {
                    NameOrigin::PhoneticCreative
                };
                GenerateResponse {
                    results: vec![NameResult {
                        name: legacy.chinese_name,
                        pinyin: None,
                        score: None,
                        lunar_date: legacy.lunar_date,
                        cultural_insights: CulturalInsights {
                            meaning: legacy.meaning.unwrap_or_default(),
                            name_origin,
                        },
                        poetry_references: legacy.poem_reference.into_iter().collect(),
                    }],
                }
            }
        }
    }
}

/// 詳細彈窗要顯示的內容，由單一結果推導而來
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    pub name: String,
    pub meaning_line: String,
    pub lunar_date: Option<String>,
    pub poetry_paragraphs: Vec<String>,
}

impl DetailContent {
    pub fn from_result(result: &NameResult) -> Self {
        let meaning_line = match result.cultural_insights.name_origin {
            NameOrigin::ClassicPoetry => format!(
                "「{}」取自古典詩詞，寓意：{}",
                result.name, result.cultural_insights.meaning
            ),
            _ => format!("「{}」寓意：{}", result.name, result.cultural_insights.meaning),
        };

        let poetry_paragraphs = if result.poetry_references.is_empty() {
            vec!["此名字暫無相關詩詞引用。".to_string()]
        } else {
            result.poetry_references.clone()
        };

        Self {
            name: result.name.clone(),
            meaning_line,
            lunar_date: result.lunar_date.clone(),
            poetry_paragraphs,
        }
    }
}
