use serde::Deserialize;

/// A site registered under an NG WAF corp.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// One page of the sites listing. A response without a `data` field
/// deserializes as an empty page.
#[derive(Deserialize, Debug, Default)]
pub struct SitesPage {
    #[serde(default)]
    pub data: Vec<Site>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_deserializes_display_name() {
        let site: Site =
            serde_json::from_str(r#"{"name": "www", "displayName": "Production WWW"}"#).unwrap();
        assert_eq!(site.name, "www");
        assert_eq!(site.display_name, "Production WWW");
    }

    #[test]
    fn test_site_ignores_extra_fields() {
        let site: Site = serde_json::from_str(
            r#"{"name": "api", "displayName": "API", "agentLevel": "block", "created": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(site.name, "api");
    }

    #[test]
    fn test_sites_page_missing_data_is_empty() {
        let page: SitesPage = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_sites_page_with_data() {
        let page: SitesPage = serde_json::from_str(
            r#"{"data": [{"name": "a", "displayName": "Site A"}, {"name": "b", "displayName": "Site B"}]}"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].display_name, "Site B");
    }
}
