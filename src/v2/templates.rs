//! Template management for the v2 protocol.

use serde::Serialize;

use super::{encode_path_segment, paginate, PageOpts, V2Operation};
use crate::http::HttpMethod;
use crate::types::EmailTemplateContent;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateEmailTemplateRequest<'a> {
    template_name: &'a str,
    template_content: &'a EmailTemplateContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct UpdateEmailTemplateRequest<'a> {
    template_content: &'a EmailTemplateContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TestRenderTemplateRequest<'a> {
    template_data: &'a str,
}

/// Build a `CreateEmailTemplate` operation.
pub fn create_email_template(
    template_name: &str,
    content: &EmailTemplateContent,
) -> V2Operation {
    V2Operation::new(HttpMethod::Post, "/v2/email/templates").with_json(
        &CreateEmailTemplateRequest {
            template_name,
            template_content: content,
        },
    )
}

/// Build a `GetEmailTemplate` operation.
pub fn get_email_template(template_name: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Get, template_path(template_name))
}

/// Build a `ListEmailTemplates` operation.
pub fn list_email_templates(opts: &PageOpts) -> V2Operation {
    V2Operation::new(HttpMethod::Get, paginate("/v2/email/templates", opts))
}

/// Build an `UpdateEmailTemplate` operation.
pub fn update_email_template(
    template_name: &str,
    content: &EmailTemplateContent,
) -> V2Operation {
    V2Operation::new(HttpMethod::Put, template_path(template_name)).with_json(
        &UpdateEmailTemplateRequest {
            template_content: content,
        },
    )
}

/// Build a `DeleteEmailTemplate` operation.
pub fn delete_email_template(template_name: &str) -> V2Operation {
    V2Operation::new(HttpMethod::Delete, template_path(template_name))
}

/// Build a `TestRenderEmailTemplate` operation.
///
/// `template_data` is JSON-encoded into the `TemplateData` string the
/// service substitutes into the stored template.
pub fn test_render_email_template(
    template_name: &str,
    template_data: &serde_json::Value,
) -> V2Operation {
    let data = template_data.to_string();
    V2Operation::new(
        HttpMethod::Post,
        format!("{}/render", template_path(template_name)),
    )
    .with_json(&TestRenderTemplateRequest {
        template_data: &data,
    })
}

fn template_path(template_name: &str) -> String {
    format!("/v2/email/templates/{}", encode_path_segment(template_name))
}
