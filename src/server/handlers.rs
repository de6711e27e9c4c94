//! MCP tool handlers for the contacts service.
//!
//! Every service operation is exposed as one tool using the rmcp SDK's
//! tool_router pattern. Record payloads arrive as raw JSON and are decoded
//! here, so a malformed record is reported as invalid params rather than
//! rejected by the transport.

use crate::error::ContactError;
use crate::models::{Address, Contact, Id, Phone};
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server exposing contact, address and phone maintenance tools.
#[derive(Clone)]
pub struct ContactsMcpServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contacts-service".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a contact registry - load, add, update and delete contacts together with the addresses and phones they own. Records are validated and children are checked against their owning contact.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    #[serde(default)]
    contact_id: Option<Id>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddressIdParams {
    #[serde(default)]
    address_id: Option<Id>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneIdParams {
    #[serde(default)]
    phone_id: Option<Id>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactAddressIdParams {
    #[serde(default)]
    contact_id: Option<Id>,
    #[serde(default)]
    address_id: Option<Id>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactPhoneIdParams {
    #[serde(default)]
    contact_id: Option<Id>,
    #[serde(default)]
    phone_id: Option<Id>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactRecordParams {
    /// Contact record: id, name, birthdate (dd-MM-yyyy), cpf
    #[serde(default)]
    contact: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddressRecordParams {
    /// Address record: id, contactId, addressType, streetType, street,
    /// number, complement, neighborhood, city, zipCode
    #[serde(default)]
    address: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneRecordParams {
    /// Phone record: id, contactId, phoneType, ddi, ddd, number, extension
    #[serde(default)]
    phone: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactAddressRecordParams {
    #[serde(default)]
    contact_id: Option<Id>,
    #[serde(default)]
    address: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactPhoneRecordParams {
    #[serde(default)]
    contact_id: Option<Id>,
    #[serde(default)]
    phone: Option<serde_json::Value>,
}

/// Map a service failure onto the MCP error code a client can act on.
fn to_mcp_error(e: ContactError) -> McpError {
    let code = if e.is_invalid_input() {
        ErrorCode::INVALID_PARAMS
    } else if e.is_not_found() {
        ErrorCode::RESOURCE_NOT_FOUND
    } else {
        tracing::error!("Storage failure: {:?}", e);
        ErrorCode::INTERNAL_ERROR
    };

    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Decode an optional record payload.
fn decode_record<T: DeserializeOwned>(
    element: &str,
    value: Option<serde_json::Value>,
) -> Result<Option<T>, McpError> {
    value
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(format!("{} record is malformed: {}", element, e)),
            data: None,
        })
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_response = serde_json::to_string_pretty(value).map_err(internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(json_response)]))
}

fn deleted(element: &str, id: Option<Id>) -> Result<CallToolResult, McpError> {
    json_result(&serde_json::json!({ "deleted": element, "id": id }))
}

// Tool router implementation
#[tool_router]
impl ContactsMcpServer {
    /// Create a new server over a contact service.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List every contact")]
    async fn load_contacts(&self) -> Result<CallToolResult, McpError> {
        let contacts = self
            .contact_service
            .load_contacts()
            .await
            .map_err(to_mcp_error)?;

        json_result(&contacts)
    }

    #[tool(description = "List the addresses of an existing contact")]
    async fn load_contact_addresses(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let addresses = self
            .contact_service
            .load_contact_addresses(params.0.contact_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&addresses)
    }

    #[tool(description = "List the phones of an existing contact")]
    async fn load_contact_phones(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let phones = self
            .contact_service
            .load_contact_phones(params.0.contact_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&phones)
    }

    #[tool(description = "Get a contact by ID. Returns null when no such contact exists")]
    async fn load_contact_by_id(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact = self
            .contact_service
            .load_contact_by_id(params.0.contact_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contact)
    }

    #[tool(description = "Get an address by ID. Returns null when no such address exists")]
    async fn load_address_by_id(
        &self,
        params: Parameters<AddressIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let address = self
            .contact_service
            .load_address_by_id(params.0.address_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&address)
    }

    #[tool(description = "Get a phone by ID. Returns null when no such phone exists")]
    async fn load_phone_by_id(
        &self,
        params: Parameters<PhoneIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let phone = self
            .contact_service
            .load_phone_by_id(params.0.phone_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&phone)
    }

    #[tool(description = "Get one address of a contact. Fails when the address belongs to another contact")]
    async fn load_contact_address(
        &self,
        params: Parameters<ContactAddressIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let address = self
            .contact_service
            .load_contact_address(params.contact_id, params.address_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&address)
    }

    #[tool(description = "Get one phone of a contact. Fails when the phone belongs to another contact")]
    async fn load_contact_phone(
        &self,
        params: Parameters<ContactPhoneIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let phone = self
            .contact_service
            .load_contact_phone(params.contact_id, params.phone_id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&phone)
    }

    #[tool(description = "Create a contact. The record must not carry an ID")]
    async fn add_contact(
        &self,
        params: Parameters<ContactRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact: Option<Contact> = decode_record("contact", params.0.contact)?;

        tracing::info!("MCP Handler: add_contact called");
        let contact = self
            .contact_service
            .add_contact(contact)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contact)
    }

    #[tool(description = "Create an address. The record must name its owning contact in contactId")]
    async fn add_address(
        &self,
        params: Parameters<AddressRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let address: Option<Address> = decode_record("address", params.0.address)?;

        tracing::info!("MCP Handler: add_address called");
        let address = self
            .contact_service
            .add_address(address)
            .await
            .map_err(to_mcp_error)?;

        json_result(&address)
    }

    #[tool(description = "Create a phone. The record must name its owning contact in contactId")]
    async fn add_phone(
        &self,
        params: Parameters<PhoneRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let phone: Option<Phone> = decode_record("phone", params.0.phone)?;

        tracing::info!("MCP Handler: add_phone called");
        let phone = self
            .contact_service
            .add_phone(phone)
            .await
            .map_err(to_mcp_error)?;

        json_result(&phone)
    }

    #[tool(description = "Create an address for an existing contact")]
    async fn add_contact_address(
        &self,
        params: Parameters<ContactAddressRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let address: Option<Address> = decode_record("address", params.address)?;

        tracing::info!("MCP Handler: add_contact_address called");
        let address = self
            .contact_service
            .add_contact_address(params.contact_id, address)
            .await
            .map_err(to_mcp_error)?;

        json_result(&address)
    }

    #[tool(description = "Create a phone for an existing contact")]
    async fn add_contact_phone(
        &self,
        params: Parameters<ContactPhoneRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let phone: Option<Phone> = decode_record("phone", params.phone)?;

        tracing::info!("MCP Handler: add_contact_phone called");
        let phone = self
            .contact_service
            .add_contact_phone(params.contact_id, phone)
            .await
            .map_err(to_mcp_error)?;

        json_result(&phone)
    }

    #[tool(description = "Overwrite an existing contact identified by the record's ID")]
    async fn update_contact(
        &self,
        params: Parameters<ContactRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact: Option<Contact> = decode_record("contact", params.0.contact)?;

        tracing::info!("MCP Handler: update_contact called");
        let contact = self
            .contact_service
            .update_contact(contact)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contact)
    }

    #[tool(description = "Overwrite an existing address identified by the record's ID")]
    async fn update_address(
        &self,
        params: Parameters<AddressRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let address: Option<Address> = decode_record("address", params.0.address)?;

        tracing::info!("MCP Handler: update_address called");
        let address = self
            .contact_service
            .update_address(address)
            .await
            .map_err(to_mcp_error)?;

        json_result(&address)
    }

    #[tool(description = "Overwrite an address of a contact. Fails when the address belongs to another contact")]
    async fn update_address_for_contact(
        &self,
        params: Parameters<ContactAddressRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let address: Option<Address> = decode_record("address", params.address)?;

        tracing::info!("MCP Handler: update_address_for_contact called");
        let address = self
            .contact_service
            .update_address_for_contact(params.contact_id, address)
            .await
            .map_err(to_mcp_error)?;

        json_result(&address)
    }

    #[tool(description = "Overwrite an existing phone identified by the record's ID")]
    async fn update_phone(
        &self,
        params: Parameters<PhoneRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let phone: Option<Phone> = decode_record("phone", params.0.phone)?;

        tracing::info!("MCP Handler: update_phone called");
        let phone = self
            .contact_service
            .update_phone(phone)
            .await
            .map_err(to_mcp_error)?;

        json_result(&phone)
    }

    #[tool(description = "Overwrite a phone of a contact. Fails when the phone belongs to another contact")]
    async fn update_phone_for_contact(
        &self,
        params: Parameters<ContactPhoneRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let phone: Option<Phone> = decode_record("phone", params.phone)?;

        tracing::info!("MCP Handler: update_phone_for_contact called");
        let phone = self
            .contact_service
            .update_phone_for_contact(params.contact_id, phone)
            .await
            .map_err(to_mcp_error)?;

        json_result(&phone)
    }

    #[tool(description = "Delete a contact together with all of its addresses and phones")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let contact_id = params.0.contact_id;

        tracing::info!("MCP Handler: delete_contact called");
        self.contact_service
            .delete_contact(contact_id)
            .await
            .map_err(to_mcp_error)?;

        deleted("contact", contact_id)
    }

    #[tool(description = "Delete an address")]
    async fn delete_address(
        &self,
        params: Parameters<AddressIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let address_id = params.0.address_id;

        tracing::info!("MCP Handler: delete_address called");
        self.contact_service
            .delete_address(address_id)
            .await
            .map_err(to_mcp_error)?;

        deleted("address", address_id)
    }

    #[tool(description = "Delete an address of a contact. Fails when the address belongs to another contact")]
    async fn delete_address_for_contact(
        &self,
        params: Parameters<ContactAddressIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: delete_address_for_contact called");
        self.contact_service
            .delete_address_for_contact(params.contact_id, params.address_id)
            .await
            .map_err(to_mcp_error)?;

        deleted("address", params.address_id)
    }

    #[tool(description = "Delete a phone")]
    async fn delete_phone(
        &self,
        params: Parameters<PhoneIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let phone_id = params.0.phone_id;

        tracing::info!("MCP Handler: delete_phone called");
        self.contact_service
            .delete_phone(phone_id)
            .await
            .map_err(to_mcp_error)?;

        deleted("phone", phone_id)
    }

    #[tool(description = "Delete a phone of a contact. Fails when the phone belongs to another contact")]
    async fn delete_phone_for_contact(
        &self,
        params: Parameters<ContactPhoneIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: delete_phone_for_contact called");
        self.contact_service
            .delete_phone_for_contact(params.contact_id, params.phone_id)
            .await
            .map_err(to_mcp_error)?;

        deleted("phone", params.phone_id)
    }
}
