//! Learning Path API

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::client::ApiClient;
use crate::application::error::ApiClientError;
use crate::application::request::ApiRequest;
use crate::domain::Envelope;

/// 学习路线的一个阶段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON 数组字符串
    #[serde(default)]
    pub topics: Option<String>,
    /// JSON 数组字符串
    #[serde(default)]
    pub recommend_questions: Option<String>,
    #[serde(default)]
    pub order_num: Option<i32>,
    #[serde(default, deserialize_with = "backend_time")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "backend_time")]
    pub update_time: Option<DateTime<Utc>>,
}

impl LearningPath {
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// 解析重点题型
    pub fn topic_list(&self) -> Result<Vec<String>, ApiClientError> {
        parse_string_array("topics", self.topics.as_deref())
    }

    pub fn recommended_question_list(&self) -> Result<Vec<String>, ApiClientError> {
        parse_string_array("recommendQuestions", self.recommend_questions.as_deref())
    }
}

/// 后端时间字段既可能是毫秒时间戳，也可能是格式化字符串；无法识别时视为缺失
fn backend_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .map(|t| t.and_utc())
            }),
        _ => None,
    };
    Ok(parsed)
}

fn parse_string_array(field: &str, raw: Option<&str>) -> Result<Vec<String>, ApiClientError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| ApiClientError::unexpected_data(format!("{}: {}", field, e))),
    }
}

#[derive(Clone)]
pub struct LearningPathApi {
    client: ApiClient,
}

impl LearningPathApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Envelope, ApiClientError> {
        self.client
            .execute(ApiRequest::get("/learning-path/list"))
            .await
    }

    /// 按 orderNum 排序后的路线阶段
    pub async fn list_typed(&self) -> Result<Vec<LearningPath>, ApiClientError> {
        let envelope = self.list().await?;
        let mut paths: Vec<LearningPath> = envelope
            .data_as()
            .map_err(|e| self.client.reject_data("learning paths", e))?;
        paths.sort_by_key(|p| p.order_num.unwrap_or(i32::MAX));
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{Harness, ScriptedTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_typed_sorts_by_order() {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::json(
            200,
            json!({"code": 200, "msg": "ok", "data": [
                {"id": 2, "title": "Advanced", "orderNum": 2, "topics": "[\"tokio\"]"},
                {"id": 1, "title": "Basics", "orderNum": 1, "topics": "[\"ownership\",\"traits\"]"}
            ]}),
        )]);
        let h = Harness::new(transport);

        let paths = LearningPathApi::new(h.client.clone()).list_typed().await.unwrap();

        assert_eq!(h.transport.last().path, "/api/learning-path/list");
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].title_or_default(), "Basics");
        assert_eq!(paths[0].topic_list().unwrap(), vec!["ownership", "traits"]);
        assert!(paths[1].recommended_question_list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_typed_rejects_wrong_shape() {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::json(
            200,
            json!({"code": 200, "data": {"not": "a list"}}),
        )]);
        let h = Harness::new(transport);

        let err = LearningPathApi::new(h.client.clone()).list_typed().await.unwrap_err();
        assert!(matches!(err, ApiClientError::UnexpectedData(_)));
        assert_eq!(h.notifier.emitted(), 1);
    }

    #[tokio::test]
    async fn test_list_typed_accepts_backend_date_forms() {
        let transport = ScriptedTransport::new(vec![ScriptedTransport::json(
            200,
            json!({"code": 200, "data": [
                {"id": 1, "title": null, "createTime": 1700000000000_i64, "updateTime": "2024-03-01 08:30:00"},
                {"id": 2, "title": "Advanced", "createTime": "2024-03-01T08:30:00Z", "updateTime": "yesterday"}
            ]}),
        )]);
        let h = Harness::new(transport);

        let paths = LearningPathApi::new(h.client.clone()).list_typed().await.unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].title, None);
        assert_eq!(
            paths[0].create_time,
            Utc.timestamp_millis_opt(1_700_000_000_000).single()
        );
        assert_eq!(
            paths[0].update_time,
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).single()
        );
        assert_eq!(paths[1].create_time, paths[0].update_time);
        assert_eq!(paths[1].update_time, None);
        assert_eq!(h.notifier.emitted(), 0);
    }

    #[test]
    fn test_topic_list_malformed() {
        let path = LearningPath {
            id: 1,
            title: Some("Basics".into()),
            short_desc: None,
            description: None,
            topics: Some("not json".into()),
            recommend_questions: None,
            order_num: None,
            create_time: None,
            update_time: None,
        };
        assert!(path.topic_list().is_err());
    }
}
