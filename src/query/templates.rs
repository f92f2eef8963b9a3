//! Template management operations for the Query protocol.
//!
//! Templates are a named subject/HTML/text triple stored server-side; the
//! wire nests their fields under a `Template.` prefix, produced here by
//! the parameter flattener.

use serde::Serialize;

use super::params::{flatten_struct, insert_opt, Params};
use super::{QueryAction, QueryOperation};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TemplateParts<'a> {
    template_name: &'a str,
    subject_part: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_part: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_part: Option<&'a str>,
}

/// Optional parameters of the template listing.
#[derive(Debug, Clone, Default)]
pub struct ListTemplatesOpts {
    /// Maximum number of templates per page.
    pub max_items: Option<u32>,
    /// Pagination token from a previous listing.
    pub next_token: Option<String>,
}

/// Build a `CreateTemplate` operation.
///
/// Absent HTML/text parts contribute no parameters.
pub fn create_template(
    template_name: &str,
    subject: &str,
    html: Option<&str>,
    text: Option<&str>,
) -> QueryOperation {
    QueryOperation::new(
        QueryAction::CreateTemplate,
        template_params(template_name, subject, html, text),
    )
}

/// Build an `UpdateTemplate` operation.
pub fn update_template(
    template_name: &str,
    subject: &str,
    html: Option<&str>,
    text: Option<&str>,
) -> QueryOperation {
    QueryOperation::new(
        QueryAction::UpdateTemplate,
        template_params(template_name, subject, html, text),
    )
}

/// Build a `DeleteTemplate` operation.
pub fn delete_template(template_name: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("TemplateName".to_string(), template_name.to_string());
    QueryOperation::new(QueryAction::DeleteTemplate, params)
}

/// Build a `GetTemplate` operation.
pub fn get_template(template_name: &str) -> QueryOperation {
    let mut params = Params::new();
    params.insert("TemplateName".to_string(), template_name.to_string());
    QueryOperation::new(QueryAction::GetTemplate, params)
}

/// Build a `ListTemplates` operation.
pub fn list_templates(opts: &ListTemplatesOpts) -> QueryOperation {
    let mut params = Params::new();
    if let Some(max_items) = opts.max_items {
        params.insert("MaxItems".to_string(), max_items.to_string());
    }
    insert_opt(&mut params, "NextToken", &opts.next_token);
    QueryOperation::new(QueryAction::ListTemplates, params)
}

fn template_params(
    template_name: &str,
    subject: &str,
    html: Option<&str>,
    text: Option<&str>,
) -> Params {
    flatten_struct(
        "Template",
        &TemplateParts {
            template_name,
            subject_part: subject,
            html_part: html,
            text_part: text,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_template_nests_under_template() {
        let op = create_template("welcome", "Hi {{name}}", Some("<p>{{name}}</p>"), None);
        let params = op.params();

        assert_eq!(params["Action"], "CreateTemplate");
        assert_eq!(params["Template.TemplateName"], "welcome");
        assert_eq!(params["Template.SubjectPart"], "Hi {{name}}");
        assert_eq!(params["Template.HtmlPart"], "<p>{{name}}</p>");
        assert!(!params.contains_key("Template.TextPart"));
    }

    #[test]
    fn test_update_template_same_shape() {
        let op = update_template("welcome", "Hi", None, Some("plain"));
        assert_eq!(op.params()["Action"], "UpdateTemplate");
        assert_eq!(op.params()["Template.TextPart"], "plain");
    }

    #[test]
    fn test_delete_and_get_take_bare_name() {
        assert_eq!(delete_template("welcome").params()["TemplateName"], "welcome");
        assert_eq!(get_template("welcome").params()["TemplateName"], "welcome");
    }

    #[test]
    fn test_list_templates_pagination() {
        let opts = ListTemplatesOpts {
            max_items: Some(10),
            next_token: Some("tok".to_string()),
        };
        let op = list_templates(&opts);
        assert_eq!(op.params()["MaxItems"], "10");
        assert_eq!(op.params()["NextToken"], "tok");

        assert_eq!(list_templates(&ListTemplatesOpts::default()).params().len(), 1);
    }
}
