//! Email sending operations for the Query protocol.
//!
//! Four send variants exist: structured ([`send_email`]), raw MIME
//! ([`send_raw_email`]), stored-template ([`send_templated_email`]) and
//! bulk stored-template ([`send_bulk_templated_email`]). Each builds the
//! flat parameter map the service expects, with destinations and tags
//! going through `member.N` indexing and the message through recursive
//! flattening, and returns an inert [`QueryOperation`].

use base64::Engine as _;

use super::params::{
    destination_params, flatten_struct, insert_opt, member_list, member_maps, Params,
};
use super::{QueryAction, QueryOperation};
use crate::types::{BulkDestination, Destination, Message, RawMessage, Tag};

/// Optional parameters of [`send_email`] and [`send_templated_email`].
///
/// Fields left `None` contribute no parameters.
#[derive(Debug, Clone, Default)]
pub struct SendEmailOpts {
    /// Configuration set to apply to the send.
    pub configuration_set_name: Option<String>,
    /// Address bounces and complaints are forwarded to.
    pub return_path: Option<String>,
    /// ARN authorizing use of the return path.
    pub return_path_arn: Option<String>,
    /// ARN authorizing sending from the source address.
    pub source_arn: Option<String>,
    /// Reply-to addresses.
    pub reply_to: Option<Vec<String>>,
    /// Message tags published to event destinations.
    pub tags: Option<Vec<Tag>>,
}

/// Optional parameters of [`send_raw_email`].
#[derive(Debug, Clone, Default)]
pub struct SendRawEmailOpts {
    /// Configuration set to apply to the send.
    pub configuration_set_name: Option<String>,
    /// ARN authorizing the `From` header address.
    pub from_arn: Option<String>,
    /// ARN authorizing use of the return path.
    pub return_path_arn: Option<String>,
    /// Envelope source; defaults to the MIME `From` header when absent.
    pub source: Option<String>,
    /// ARN authorizing sending from the source address.
    pub source_arn: Option<String>,
}

/// Optional parameters of [`send_bulk_templated_email`].
#[derive(Debug, Clone, Default)]
pub struct SendBulkTemplatedEmailOpts {
    /// Configuration set to apply to the send.
    pub configuration_set_name: Option<String>,
    /// Template data applied to entries without replacement data.
    /// Encodes to the literal `"{}"` when absent.
    pub default_template_data: Option<serde_json::Value>,
    /// Address bounces and complaints are forwarded to.
    pub return_path: Option<String>,
    /// ARN authorizing use of the return path.
    pub return_path_arn: Option<String>,
    /// ARN authorizing sending from the source address.
    pub source_arn: Option<String>,
    /// Reply-to addresses.
    pub reply_to: Option<Vec<String>>,
}

/// Build a `SendEmail` operation.
pub fn send_email(
    destination: &Destination,
    message: &Message,
    source: &str,
    opts: &SendEmailOpts,
) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Source".to_string(), source.to_string());
    params.extend(destination_params("Destination", destination));
    params.extend(flatten_struct("Message", message));
    extend_send_opts(&mut params, opts);
    QueryOperation::new(QueryAction::SendEmail, params)
}

/// Build a `SendRawEmail` operation.
///
/// The raw MIME bytes are base64-encoded into `RawMessage.Data`.
pub fn send_raw_email(raw_message: &RawMessage, opts: &SendRawEmailOpts) -> QueryOperation {
    let mut params = Params::new();
    params.insert(
        "RawMessage.Data".to_string(),
        base64::engine::general_purpose::STANDARD.encode(&raw_message.data),
    );
    insert_opt(&mut params, "ConfigurationSetName", &opts.configuration_set_name);
    insert_opt(&mut params, "FromArn", &opts.from_arn);
    insert_opt(&mut params, "ReturnPathArn", &opts.return_path_arn);
    insert_opt(&mut params, "Source", &opts.source);
    insert_opt(&mut params, "SourceArn", &opts.source_arn);
    QueryOperation::new(QueryAction::SendRawEmail, params)
}

/// Build a `SendTemplatedEmail` operation.
///
/// `template_data` is JSON-encoded into the `TemplateData` parameter;
/// `None` encodes to the literal `"{}"`.
pub fn send_templated_email(
    destination: &Destination,
    source: &str,
    template: &str,
    template_data: Option<&serde_json::Value>,
    opts: &SendEmailOpts,
) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Source".to_string(), source.to_string());
    params.insert("Template".to_string(), template.to_string());
    params.insert("TemplateData".to_string(), encode_template_data(template_data));
    params.extend(destination_params("Destination", destination));
    extend_send_opts(&mut params, opts);
    QueryOperation::new(QueryAction::SendTemplatedEmail, params)
}

/// Build a `SendBulkTemplatedEmail` operation.
///
/// Each destination entry is assigned a 1-based index; its recipient
/// classes nest under `Destinations.member.{i}.Destination.*` and its
/// replacement data, when present, under
/// `Destinations.member.{i}.ReplacementTemplateData`.
pub fn send_bulk_templated_email(
    template: &str,
    source: &str,
    destinations: &[BulkDestination],
    opts: &SendBulkTemplatedEmailOpts,
) -> QueryOperation {
    let mut params = Params::new();
    params.insert("Source".to_string(), source.to_string());
    params.insert("Template".to_string(), template.to_string());
    params.insert(
        "DefaultTemplateData".to_string(),
        encode_template_data(opts.default_template_data.as_ref()),
    );
    params.extend(member_maps(
        "Destinations",
        Some(destinations.iter().map(bulk_destination_entry)),
    ));
    insert_opt(&mut params, "ConfigurationSetName", &opts.configuration_set_name);
    insert_opt(&mut params, "ReturnPath", &opts.return_path);
    insert_opt(&mut params, "ReturnPathArn", &opts.return_path_arn);
    insert_opt(&mut params, "SourceArn", &opts.source_arn);
    params.extend(member_list("ReplyToAddresses", opts.reply_to.as_deref()));
    QueryOperation::new(QueryAction::SendBulkTemplatedEmail, params)
}

fn bulk_destination_entry(entry: &BulkDestination) -> Params {
    let mut fragment = destination_params("Destination", &entry.destination);
    if let Some(data) = &entry.replacement_template_data {
        fragment.insert("ReplacementTemplateData".to_string(), data.to_string());
    }
    fragment
}

fn encode_template_data(data: Option<&serde_json::Value>) -> String {
    match data {
        Some(value) => value.to_string(),
        None => "{}".to_string(),
    }
}

fn tag_entries(tags: &[Tag]) -> Vec<Params> {
    tags.iter()
        .map(|tag| {
            let mut entry = Params::new();
            entry.insert("Name".to_string(), tag.name.clone());
            entry.insert("Value".to_string(), tag.value.clone());
            entry
        })
        .collect()
}

fn extend_send_opts(params: &mut Params, opts: &SendEmailOpts) {
    insert_opt(params, "ConfigurationSetName", &opts.configuration_set_name);
    insert_opt(params, "ReturnPath", &opts.return_path);
    insert_opt(params, "ReturnPathArn", &opts.return_path_arn);
    insert_opt(params, "SourceArn", &opts.source_arn);
    params.extend(member_list("ReplyToAddresses", opts.reply_to.as_deref()));
    params.extend(member_maps(
        "Tags",
        opts.tags.as_deref().map(tag_entries),
    ));
}
