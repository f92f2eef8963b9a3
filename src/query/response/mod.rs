//! Decoding of Query-protocol XML responses.
//!
//! [`parse`] takes the raw transport response together with the
//! [`QueryAction`] that produced the request and returns either the
//! operation's typed result or the service's uniform error value. The
//! dispatch is an exhaustive match: every action has a decoding arm, and
//! adding an action without one fails to compile.
//!
//! Success documents share one envelope: `<{Action}Response>` wrapping
//! `<{Action}Result>` and `<ResponseMetadata><RequestId>`. Error documents
//! share `<ErrorResponse><Error>...</Error><RequestId>...` for every
//! operation.

pub mod results;
mod xml;

use http::StatusCode;
use tracing::debug;

use self::results::*;
use self::xml::Element;
use crate::error::{SesApiError, SesError, SesResult};
use crate::http::RawResponse;
use crate::query::QueryAction;

/// Decode a raw response for the operation that produced it.
///
/// # Errors
///
/// - [`SesError::Api`] when the service answered with an error status and
///   a decodable error body;
/// - [`SesError::MalformedResponse`] when the body is not well-formed XML
///   or the expected result envelope is absent;
/// - [`SesError::MissingElement`] when a mandatory result field is absent.
pub fn parse(raw: &RawResponse, action: QueryAction) -> SesResult<QueryResponse> {
    let body = raw.body_str()?;
    if !raw.is_success() {
        return Err(SesError::Api(parse_error_body(body, raw.status())?));
    }

    debug!(action = action.as_str(), "decoding query response");
    let doc = xml::parse_document(body)?;
    let request_id = doc
        .descendant(&["ResponseMetadata", "RequestId"])
        .map(|el| el.text().to_string())
        .ok_or(SesError::MissingElement {
            element: "RequestId",
            action: action.as_str(),
        })?;

    match action {
        QueryAction::SendEmail
        | QueryAction::SendRawEmail
        | QueryAction::SendTemplatedEmail
        | QueryAction::SendCustomVerificationEmail => {
            let result = result_element(&doc, action)?;
            Ok(QueryResponse::Send(SendResponse {
                request_id,
                message_id: require_text(result, "MessageId", action)?,
            }))
        }

        QueryAction::SendBulkTemplatedEmail => {
            let result = result_element(&doc, action)?;
            let status = require_child(result, "Status", action)?;
            let messages = status
                .children("member")
                .map(|member| {
                    Ok(BulkMessageResult {
                        message_id: member.child_text("MessageId").map(str::to_string),
                        status: require_text(member, "Status", action)?,
                    })
                })
                .collect::<SesResult<Vec<_>>>()?;
            Ok(QueryResponse::BulkSend(SendBulkTemplatedEmailResponse {
                request_id,
                messages,
            }))
        }

        QueryAction::VerifyEmailIdentity
        | QueryAction::DeleteIdentity
        | QueryAction::CreateTemplate
        | QueryAction::UpdateTemplate
        | QueryAction::DeleteTemplate
        | QueryAction::SetIdentityNotificationTopic
        | QueryAction::SetIdentityFeedbackForwardingEnabled
        | QueryAction::SetIdentityHeadersInNotificationsEnabled
        | QueryAction::CreateCustomVerificationEmailTemplate
        | QueryAction::UpdateCustomVerificationEmailTemplate
        | QueryAction::DeleteCustomVerificationEmailTemplate => {
            Ok(QueryResponse::Simple(SimpleResponse { request_id }))
        }

        QueryAction::VerifyDomainIdentity => {
            let result = result_element(&doc, action)?;
            Ok(QueryResponse::VerifyDomainIdentity(
                VerifyDomainIdentityResponse {
                    request_id,
                    verification_token: require_text(result, "VerificationToken", action)?,
                },
            ))
        }

        QueryAction::VerifyDomainDkim => {
            let result = result_element(&doc, action)?;
            let tokens = require_child(result, "DkimTokens", action)?;
            Ok(QueryResponse::VerifyDomainDkim(VerifyDomainDkimResponse {
                request_id,
                dkim_tokens: member_texts(tokens),
            }))
        }

        QueryAction::GetIdentityVerificationAttributes => {
            let result = result_element(&doc, action)?;
            let container = require_child(result, "VerificationAttributes", action)?;
            let mut verification_attributes = std::collections::BTreeMap::new();
            for entry in container.children("entry") {
                let identity = require_text(entry, "key", action)?;
                let value = require_child(entry, "value", action)?;
                verification_attributes.insert(
                    identity,
                    IdentityVerificationAttributes {
                        verification_token: value
                            .child_text("VerificationToken")
                            .map(str::to_string),
                        verification_status: value
                            .child_text("VerificationStatus")
                            .map(str::to_string),
                    },
                );
            }
            Ok(QueryResponse::IdentityVerificationAttributes(
                GetIdentityVerificationAttributesResponse {
                    request_id,
                    verification_attributes,
                },
            ))
        }

        QueryAction::ListIdentities => {
            let result = result_element(&doc, action)?;
            let identities = require_child(result, "Identities", action)?;
            Ok(QueryResponse::Identities(ListIdentitiesResponse {
                request_id,
                identities: member_texts(identities),
                next_token: next_token(result),
            }))
        }

        QueryAction::ListConfigurationSets => {
            let result = result_element(&doc, action)?;
            let sets = require_child(result, "ConfigurationSets", action)?;
            let configuration_sets = sets
                .children("member")
                .map(|member| require_text(member, "Name", action))
                .collect::<SesResult<Vec<_>>>()?;
            Ok(QueryResponse::ConfigurationSets(
                ListConfigurationSetsResponse {
                    request_id,
                    configuration_sets,
                    next_token: next_token(result),
                },
            ))
        }

        QueryAction::GetTemplate => {
            let result = result_element(&doc, action)?;
            let template = require_child(result, "Template", action)?;
            Ok(QueryResponse::Template(GetTemplateResponse {
                request_id,
                template: TemplateInfo {
                    template_name: require_text(template, "TemplateName", action)?,
                    subject_part: require_text(template, "SubjectPart", action)?,
                    html_part: template.child_text("HtmlPart").map(str::to_string),
                    text_part: template.child_text("TextPart").map(str::to_string),
                },
            }))
        }

        QueryAction::ListTemplates => {
            let result = result_element(&doc, action)?;
            let metadata = require_child(result, "TemplatesMetadata", action)?;
            let templates = metadata
                .children("member")
                .map(|member| {
                    Ok(TemplateSummary {
                        name: require_text(member, "Name", action)?,
                        created_timestamp: member
                            .child_text("CreatedTimestamp")
                            .map(str::to_string),
                    })
                })
                .collect::<SesResult<Vec<_>>>()?;
            Ok(QueryResponse::Templates(ListTemplatesResponse {
                request_id,
                templates,
                next_token: next_token(result),
            }))
        }

        QueryAction::GetCustomVerificationEmailTemplate => {
            let result = result_element(&doc, action)?;
            Ok(QueryResponse::CustomVerificationTemplate(
                GetCustomVerificationTemplateResponse {
                    request_id,
                    template: custom_template_summary(result, action)?,
                    template_content: require_text(result, "TemplateContent", action)?,
                },
            ))
        }

        QueryAction::ListCustomVerificationEmailTemplates => {
            let result = result_element(&doc, action)?;
            let container =
                require_child(result, "CustomVerificationEmailTemplates", action)?;
            let templates = container
                .children("member")
                .map(|member| custom_template_summary(member, action))
                .collect::<SesResult<Vec<_>>>()?;
            Ok(QueryResponse::CustomVerificationTemplates(
                ListCustomVerificationTemplatesResponse {
                    request_id,
                    templates,
                    next_token: next_token(result),
                },
            ))
        }

        QueryAction::DescribeReceiptRuleSet => {
            let result = result_element(&doc, action)?;
            let metadata = require_child(result, "Metadata", action)?;
            let rules_container = require_child(result, "Rules", action)?;
            let rules = rules_container
                .children("member")
                .map(|member| {
                    let recipients = member
                        .child("Recipients")
                        .map(member_texts)
                        .unwrap_or_default();
                    Ok(ReceiptRule {
                        name: require_text(member, "Name", action)?,
                        enabled: member.child_text("Enabled") == Some("true"),
                        scan_enabled: member.child_text("ScanEnabled") == Some("true"),
                        tls_policy: member.child_text("TlsPolicy").map(str::to_string),
                        recipients,
                    })
                })
                .collect::<SesResult<Vec<_>>>()?;
            Ok(QueryResponse::ReceiptRuleSet(DescribeReceiptRuleSetResponse {
                request_id,
                metadata: ReceiptRuleSetMetadata {
                    name: require_text(metadata, "Name", action)?,
                    created_timestamp: metadata
                        .child_text("CreatedTimestamp")
                        .map(str::to_string),
                },
                rules,
            }))
        }
    }
}

/// Decode the uniform error body shared by every Query operation.
fn parse_error_body(body: &str, status: StatusCode) -> SesResult<SesApiError> {
    debug!(status = status.as_u16(), "decoding query error response");
    let doc = xml::parse_document(body)?;
    let error = doc.child("Error");
    let text_of = |name: &str| -> String {
        error
            .and_then(|el| el.child_text(name))
            .unwrap_or_default()
            .to_string()
    };
    Ok(SesApiError {
        error_type: text_of("Type"),
        code: text_of("Code"),
        message: text_of("Message"),
        request_id: doc.child_text("RequestId").unwrap_or_default().to_string(),
        status,
    })
}

fn result_element<'a>(doc: &'a Element, action: QueryAction) -> SesResult<&'a Element> {
    let name = format!("{}Result", action.as_str());
    doc.child(&name).ok_or_else(|| SesError::MalformedResponse {
        message: format!("missing element {} in {} response", name, action.as_str()),
    })
}

fn require_child<'a>(
    parent: &'a Element,
    element: &'static str,
    action: QueryAction,
) -> SesResult<&'a Element> {
    parent.child(element).ok_or(SesError::MissingElement {
        element,
        action: action.as_str(),
    })
}

fn require_text(
    parent: &Element,
    element: &'static str,
    action: QueryAction,
) -> SesResult<String> {
    Ok(require_child(parent, element, action)?.text().to_string())
}

fn member_texts(container: &Element) -> Vec<String> {
    container
        .children("member")
        .map(|member| member.text().to_string())
        .collect()
}

fn next_token(result: &Element) -> String {
    result.child_text("NextToken").unwrap_or_default().to_string()
}

fn custom_template_summary(
    parent: &Element,
    action: QueryAction,
) -> SesResult<CustomVerificationTemplateSummary> {
    Ok(CustomVerificationTemplateSummary {
        template_name: require_text(parent, "TemplateName", action)?,
        from_email_address: require_text(parent, "FromEmailAddress", action)?,
        template_subject: require_text(parent, "TemplateSubject", action)?,
        success_redirection_url: require_text(parent, "SuccessRedirectionURL", action)?,
        failure_redirection_url: require_text(parent, "FailureRedirectionURL", action)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const REQUEST_ID: &str = "47e0ef1a-9bf2-11e1-9279-0100e8cf109a";

    fn success(body: &str) -> RawResponse {
        RawResponse::new(StatusCode::OK, body.as_bytes().to_vec())
    }

    fn envelope(action: &str, result_inner: &str) -> String {
        format!(
            "<{action}Response xmlns=\"http://ses.amazonaws.com/doc/2010-12-01/\">\
             <{action}Result>{result_inner}</{action}Result>\
             <ResponseMetadata><RequestId>{REQUEST_ID}</RequestId></ResponseMetadata>\
             </{action}Response>"
        )
    }

    #[rstest]
    #[case(QueryAction::SendEmail)]
    #[case(QueryAction::DeleteIdentity)]
    #[case(QueryAction::ListIdentities)]
    fn test_error_extraction_is_uniform(#[case] action: QueryAction) {
        let body = r#"<ErrorResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
            <Error>
                <Type>Sender</Type>
                <Code>MalformedInput</Code>
                <Message>M</Message>
            </Error>
            <RequestId>R</RequestId>
        </ErrorResponse>"#;
        let raw = RawResponse::new(StatusCode::BAD_REQUEST, body.as_bytes().to_vec());

        let err = parse(&raw, action).unwrap_err();
        match err {
            SesError::Api(api) => {
                assert_eq!(api.error_type, "Sender");
                assert_eq!(api.code, "MalformedInput");
                assert_eq!(api.message, "M");
                assert_eq!(api.request_id, "R");
                assert_eq!(api.status, StatusCode::BAD_REQUEST);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_with_unparseable_body_is_malformed() {
        let raw = RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, b"not xml".to_vec());
        let err = parse(&raw, QueryAction::SendEmail).unwrap_err();
        assert!(matches!(err, SesError::MalformedResponse { .. }));
    }

    #[test]
    fn test_simple_response_request_id_only() {
        let body = envelope("VerifyEmailIdentity", "");
        let parsed = parse(&success(&body), QueryAction::VerifyEmailIdentity).unwrap();

        assert_eq!(parsed.request_id(), REQUEST_ID);
        assert!(matches!(parsed, QueryResponse::Simple(_)));
    }

    #[test]
    fn test_send_email_message_id() {
        let body = envelope(
            "SendEmail",
            "<MessageId>0000014a-f4d4-4f89-91d1-514b55cb9e29-000000</MessageId>",
        );
        let parsed = parse(&success(&body), QueryAction::SendEmail).unwrap();

        match parsed {
            QueryResponse::Send(send) => {
                assert_eq!(send.message_id, "0000014a-f4d4-4f89-91d1-514b55cb9e29-000000");
                assert_eq!(send.request_id, REQUEST_ID);
            }
            other => panic!("expected Send, got {other:?}"),
        }
    }

    #[test]
    fn test_send_email_missing_message_id_fails() {
        let body = envelope("SendEmail", "");
        let err = parse(&success(&body), QueryAction::SendEmail).unwrap_err();
        assert!(matches!(
            err,
            SesError::MissingElement {
                element: "MessageId",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_request_id_fails() {
        let body = "<SendEmailResponse><SendEmailResult/></SendEmailResponse>";
        let err = parse(&success(body), QueryAction::SendEmail).unwrap_err();
        assert!(matches!(
            err,
            SesError::MissingElement {
                element: "RequestId",
                ..
            }
        ));
    }

    #[test]
    fn test_verify_domain_identity_token() {
        let body = envelope(
            "VerifyDomainIdentity",
            "<VerificationToken>QTKknzFg2J4ygwa+XvHAxUl1hyHoY0gVfZdfjIedHZ0=</VerificationToken>",
        );
        let parsed = parse(&success(&body), QueryAction::VerifyDomainIdentity).unwrap();

        match parsed {
            QueryResponse::VerifyDomainIdentity(r) => {
                assert_eq!(
                    r.verification_token,
                    "QTKknzFg2J4ygwa+XvHAxUl1hyHoY0gVfZdfjIedHZ0="
                );
            }
            other => panic!("expected VerifyDomainIdentity, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_domain_dkim_tokens_ordered() {
        let body = envelope(
            "VerifyDomainDkim",
            "<DkimTokens>\
             <member>vvjuipp74whm76gqoni7qmwwn4w4qusjiainivf6f</member>\
             <member>3frqe7jn4obpuxjpwpolz6ipb3k5nvt2nhjpik2oy</member>\
             <member>wrqplteh7oodxnad7hsl4mixg2uavzneazxv5sxi2</member>\
             </DkimTokens>",
        );
        let parsed = parse(&success(&body), QueryAction::VerifyDomainDkim).unwrap();

        match parsed {
            QueryResponse::VerifyDomainDkim(r) => {
                assert_eq!(r.dkim_tokens.len(), 3);
                assert_eq!(r.dkim_tokens[0], "vvjuipp74whm76gqoni7qmwwn4w4qusjiainivf6f");
                assert_eq!(r.dkim_tokens[2], "wrqplteh7oodxnad7hsl4mixg2uavzneazxv5sxi2");
            }
            other => panic!("expected VerifyDomainDkim, got {other:?}"),
        }
    }

    #[test]
    fn test_verification_attributes_preserve_absence() {
        let body = envelope(
            "GetIdentityVerificationAttributes",
            "<VerificationAttributes>\
             <entry>\
             <key>example.com</key>\
             <value>\
             <VerificationToken>QTKknzFg2J4ygwa+XvHAx</VerificationToken>\
             <VerificationStatus>Success</VerificationStatus>\
             </value>\
             </entry>\
             <entry>\
             <key>user@example.com</key>\
             <value><VerificationStatus>Pending</VerificationStatus></value>\
             </entry>\
             </VerificationAttributes>",
        );
        let parsed = parse(
            &success(&body),
            QueryAction::GetIdentityVerificationAttributes,
        )
        .unwrap();

        match parsed {
            QueryResponse::IdentityVerificationAttributes(r) => {
                let domain = &r.verification_attributes["example.com"];
                assert_eq!(domain.verification_token.as_deref(), Some("QTKknzFg2J4ygwa+XvHAx"));
                assert_eq!(domain.verification_status.as_deref(), Some("Success"));

                let email = &r.verification_attributes["user@example.com"];
                assert_eq!(email.verification_token, None);
                assert_eq!(email.verification_status.as_deref(), Some("Pending"));
            }
            other => panic!("expected IdentityVerificationAttributes, got {other:?}"),
        }
    }

    #[test]
    fn test_list_identities_defaults_next_token() {
        let body = envelope(
            "ListIdentities",
            "<Identities>\
             <member>user@example.com</member>\
             <member>user2@example.com</member>\
             </Identities>",
        );
        let parsed = parse(&success(&body), QueryAction::ListIdentities).unwrap();

        match parsed {
            QueryResponse::Identities(r) => {
                assert_eq!(r.identities, vec!["user@example.com", "user2@example.com"]);
                assert_eq!(r.next_token, "");
            }
            other => panic!("expected Identities, got {other:?}"),
        }
    }

    #[test]
    fn test_list_identities_with_next_token() {
        let body = envelope(
            "ListIdentities",
            "<Identities><member>a@b.com</member></Identities>\
             <NextToken>page-2</NextToken>",
        );
        let parsed = parse(&success(&body), QueryAction::ListIdentities).unwrap();

        match parsed {
            QueryResponse::Identities(r) => assert_eq!(r.next_token, "page-2"),
            other => panic!("expected Identities, got {other:?}"),
        }
    }

    #[test]
    fn test_list_configuration_sets_names() {
        let body = envelope(
            "ListConfigurationSets",
            "<ConfigurationSets>\
             <member><Name>transactional</Name></member>\
             <member><Name>marketing</Name></member>\
             </ConfigurationSets>",
        );
        let parsed = parse(&success(&body), QueryAction::ListConfigurationSets).unwrap();

        match parsed {
            QueryResponse::ConfigurationSets(r) => {
                assert_eq!(r.configuration_sets, vec!["transactional", "marketing"]);
                assert_eq!(r.next_token, "");
            }
            other => panic!("expected ConfigurationSets, got {other:?}"),
        }
    }

    #[test]
    fn test_bulk_send_statuses_in_document_order() {
        let body = envelope(
            "SendBulkTemplatedEmail",
            "<Status>\
             <member><MessageId>id-1</MessageId><Status>Success</Status></member>\
             <member><Status>MessageRejected</Status></member>\
             <member><MessageId>id-3</MessageId><Status>Success</Status></member>\
             </Status>",
        );
        let parsed = parse(&success(&body), QueryAction::SendBulkTemplatedEmail).unwrap();

        match parsed {
            QueryResponse::BulkSend(r) => {
                assert_eq!(r.messages.len(), 3);
                assert_eq!(r.messages[0].message_id.as_deref(), Some("id-1"));
                assert_eq!(r.messages[0].status, "Success");
                assert_eq!(r.messages[1].message_id, None);
                assert_eq!(r.messages[1].status, "MessageRejected");
                assert_eq!(r.messages[2].message_id.as_deref(), Some("id-3"));
            }
            other => panic!("expected BulkSend, got {other:?}"),
        }
    }

    #[test]
    fn test_get_template_optional_parts() {
        let body = envelope(
            "GetTemplate",
            "<Template>\
             <TemplateName>welcome</TemplateName>\
             <SubjectPart>Hi {{name}}</SubjectPart>\
             <HtmlPart>&lt;p&gt;{{name}}&lt;/p&gt;</HtmlPart>\
             </Template>",
        );
        let parsed = parse(&success(&body), QueryAction::GetTemplate).unwrap();

        match parsed {
            QueryResponse::Template(r) => {
                assert_eq!(r.template.template_name, "welcome");
                assert_eq!(r.template.html_part.as_deref(), Some("<p>{{name}}</p>"));
                assert_eq!(r.template.text_part, None);
            }
            other => panic!("expected Template, got {other:?}"),
        }
    }

    #[test]
    fn test_list_templates_summaries() {
        let body = envelope(
            "ListTemplates",
            "<TemplatesMetadata>\
             <member><Name>welcome</Name><CreatedTimestamp>2020-03-01T12:00:00Z</CreatedTimestamp></member>\
             </TemplatesMetadata>\
             <NextToken>more</NextToken>",
        );
        let parsed = parse(&success(&body), QueryAction::ListTemplates).unwrap();

        match parsed {
            QueryResponse::Templates(r) => {
                assert_eq!(r.templates.len(), 1);
                assert_eq!(r.templates[0].name, "welcome");
                assert_eq!(
                    r.templates[0].created_timestamp.as_deref(),
                    Some("2020-03-01T12:00:00Z")
                );
                assert_eq!(r.next_token, "more");
            }
            other => panic!("expected Templates, got {other:?}"),
        }
    }

    #[test]
    fn test_list_custom_verification_templates() {
        let body = envelope(
            "ListCustomVerificationEmailTemplates",
            "<CustomVerificationEmailTemplates>\
             <member>\
             <TemplateName>verify</TemplateName>\
             <FromEmailAddress>no-reply@example.com</FromEmailAddress>\
             <TemplateSubject>Please verify</TemplateSubject>\
             <SuccessRedirectionURL>https://example.com/ok</SuccessRedirectionURL>\
             <FailureRedirectionURL>https://example.com/fail</FailureRedirectionURL>\
             </member>\
             </CustomVerificationEmailTemplates>",
        );
        let parsed = parse(
            &success(&body),
            QueryAction::ListCustomVerificationEmailTemplates,
        )
        .unwrap();

        match parsed {
            QueryResponse::CustomVerificationTemplates(r) => {
                assert_eq!(r.templates.len(), 1);
                let t = &r.templates[0];
                assert_eq!(t.template_name, "verify");
                assert_eq!(t.from_email_address, "no-reply@example.com");
                assert_eq!(t.success_redirection_url, "https://example.com/ok");
                assert_eq!(t.failure_redirection_url, "https://example.com/fail");
                assert_eq!(r.next_token, "");
            }
            other => panic!("expected CustomVerificationTemplates, got {other:?}"),
        }
    }

    #[test]
    fn test_get_custom_verification_template_content() {
        let body = envelope(
            "GetCustomVerificationEmailTemplate",
            "<TemplateName>verify</TemplateName>\
             <FromEmailAddress>no-reply@example.com</FromEmailAddress>\
             <TemplateSubject>Please verify</TemplateSubject>\
             <TemplateContent>&lt;p&gt;Click&lt;/p&gt;</TemplateContent>\
             <SuccessRedirectionURL>https://example.com/ok</SuccessRedirectionURL>\
             <FailureRedirectionURL>https://example.com/fail</FailureRedirectionURL>",
        );
        let parsed = parse(
            &success(&body),
            QueryAction::GetCustomVerificationEmailTemplate,
        )
        .unwrap();

        match parsed {
            QueryResponse::CustomVerificationTemplate(r) => {
                assert_eq!(r.template.template_name, "verify");
                assert_eq!(r.template_content, "<p>Click</p>");
            }
            other => panic!("expected CustomVerificationTemplate, got {other:?}"),
        }
    }

    #[test]
    fn test_describe_receipt_rule_set() {
        let body = envelope(
            "DescribeReceiptRuleSet",
            "<Metadata>\
             <Name>inbound</Name>\
             <CreatedTimestamp>2020-01-01T00:00:00Z</CreatedTimestamp>\
             </Metadata>\
             <Rules>\
             <member>\
             <Name>spam-filter</Name>\
             <Enabled>true</Enabled>\
             <ScanEnabled>true</ScanEnabled>\
             <TlsPolicy>Optional</TlsPolicy>\
             <Recipients><member>postmaster@example.com</member></Recipients>\
             </member>\
             <member>\
             <Name>archive</Name>\
             <Enabled>false</Enabled>\
             <ScanEnabled>false</ScanEnabled>\
             </member>\
             </Rules>",
        );
        let parsed = parse(&success(&body), QueryAction::DescribeReceiptRuleSet).unwrap();

        match parsed {
            QueryResponse::ReceiptRuleSet(r) => {
                assert_eq!(r.metadata.name, "inbound");
                assert_eq!(r.rules.len(), 2);
                assert!(r.rules[0].enabled);
                assert!(r.rules[0].scan_enabled);
                assert_eq!(r.rules[0].tls_policy.as_deref(), Some("Optional"));
                assert_eq!(r.rules[0].recipients, vec!["postmaster@example.com"]);
                assert!(!r.rules[1].enabled);
                assert_eq!(r.rules[1].tls_policy, None);
                assert!(r.rules[1].recipients.is_empty());
            }
            other => panic!("expected ReceiptRuleSet, got {other:?}"),
        }
    }
}
