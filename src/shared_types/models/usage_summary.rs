use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// summary statistics for an account's usage, either section may be missing
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UsageSummaryStatisticsResponse {
    pub cluster_data: Option<UsageSummaryClusterData>,
    pub infrastructure_data: Option<UsageSummaryInfrastructureData>,
}

macro_rules! opaque_usage_record {
    ($name:ident) => {
        /// a JSON object whose keys are owned by the server, read it through the accessors
        #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
        #[serde(transparent)]
        pub struct $name(Map<String, Value>);

        impl $name {
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.0.get(key)
            }

            pub fn get_u64(&self, key: &str) -> Option<u64> {
                self.0.get(key).and_then(Value::as_u64)
            }

            pub fn get_f64(&self, key: &str) -> Option<f64> {
                self.0.get(key).and_then(Value::as_f64)
            }

            pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
                self.0.iter()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(fields: Map<String, Value>) -> Self {
                Self(fields)
            }
        }
    };
}

opaque_usage_record!(UsageSummaryClusterData);
opaque_usage_record!(UsageSummaryInfrastructureData);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a json object"),
        }
    }

    #[test]
    fn empty_object_has_no_sections() {
        let res: UsageSummaryStatisticsResponse = serde_json::from_str("{}").unwrap();

        assert!(res.cluster_data.is_none());
        assert!(res.infrastructure_data.is_none());
        assert_eq!(res, UsageSummaryStatisticsResponse::default());
    }

    #[test]
    fn only_cluster_data_present() {
        let res: UsageSummaryStatisticsResponse = serde_json::from_value(json!({
            "cluster_data": { "num_clusters": 3, "total_vcpus": 12 }
        }))
        .unwrap();

        let cluster_data = res.cluster_data.expect("cluster_data should be present");
        assert_eq!(cluster_data.get_u64("num_clusters"), Some(3));
        assert_eq!(cluster_data.get_u64("total_vcpus"), Some(12));
        assert!(res.infrastructure_data.is_none());
    }

    #[test]
    fn both_sections_present() {
        let res: UsageSummaryStatisticsResponse = serde_json::from_value(json!({
            "cluster_data": { "num_clusters": 1 },
            "infrastructure_data": { "storage_gb": 40.5, "region": "us-west-2" }
        }))
        .unwrap();

        assert!(res.cluster_data.is_some());
        let infra = res.infrastructure_data.unwrap();
        assert_eq!(infra.get_f64("storage_gb"), Some(40.5));
        assert_eq!(infra.get("region"), Some(&json!("us-west-2")));
        assert_eq!(infra.get_u64("region"), None);
        assert_eq!(infra.len(), 2);
    }

    #[test]
    fn unknown_keys_and_nulls_are_ignored() {
        let res: UsageSummaryStatisticsResponse = serde_json::from_value(json!({
            "cluster_data": null,
            "infrastructure_data": {},
            "billing_period": "2024-06"
        }))
        .unwrap();

        assert!(res.cluster_data.is_none());
        let infra = res.infrastructure_data.unwrap();
        assert!(infra.is_empty());
    }

    #[test]
    fn non_object_section_is_rejected() {
        let res = serde_json::from_value::<UsageSummaryStatisticsResponse>(json!({
            "cluster_data": [1, 2, 3]
        }));
        assert!(res.is_err());

        let res = serde_json::from_value::<UsageSummaryStatisticsResponse>(json!({
            "infrastructure_data": "n/a"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn absent_sections_are_omitted_when_encoding() {
        let res = UsageSummaryStatisticsResponse {
            cluster_data: Some(object(json!({ "num_clusters": 2 })).into()),
            infrastructure_data: None,
        };

        let encoded = serde_json::to_value(&res).unwrap();
        assert_eq!(encoded, json!({ "cluster_data": { "num_clusters": 2 } }));

        let decoded: UsageSummaryStatisticsResponse = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, res);
    }

    #[test]
    fn nested_values_survive_reencoding() {
        let body = json!({
            "cluster_data": {
                "num_clusters": 4,
                "by_tier": { "free": 1, "paid": 3 }
            },
            "infrastructure_data": {
                "regions": ["us-east-1", "eu-west-1"],
                "total_disk_gb": 512
            }
        });

        let res: UsageSummaryStatisticsResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&res).unwrap(), body);
    }
}
