//! Member accounts and invitations.

use super::with_pagination;
use crate::error::MacieError;
use crate::types::*;
use aws_runtime::{resolve_path, Method, OperationRequest, ServiceClient};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountIdsBody<'a> {
    account_ids: &'a [String],
}

/// Service for the administrator/member relationship between accounts.
pub struct AccountsService {
    client: Arc<ServiceClient>,
}

impl AccountsService {
    /// Create a new accounts service.
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    /// Associate an account with the administrator account.
    pub async fn create_member(
        &self,
        request: CreateMemberRequest,
    ) -> Result<CreateMemberOutput, MacieError> {
        let op = OperationRequest::rest("CreateMember", Method::Post, "/members")
            .with_json_body(&request)?;
        Ok(self.client.invoke_json(op).await?)
    }

    /// List member accounts. With `only_associated` false, removed and
    /// invited accounts are included.
    pub async fn list_members(
        &self,
        request: ListRequest,
        only_associated: Option<bool>,
    ) -> Result<ListMembersOutput, MacieError> {
        let op = with_pagination(
            OperationRequest::rest("ListMembers", Method::Get, "/members"),
            &request,
        )
        .with_query_opt("onlyAssociated", only_associated);
        Ok(self.client.invoke_json(op).await?)
    }

    /// Get a member account.
    pub async fn get_member(&self, account_id: &str) -> Result<GetMemberOutput, MacieError> {
        let path = resolve_path("/members/{id}", &[("id", account_id)])?;
        let op = OperationRequest::rest("GetMember", Method::Get, path);
        Ok(self.client.invoke_json(op).await?)
    }

    /// Delete the association with a member account.
    pub async fn delete_member(&self, account_id: &str) -> Result<(), MacieError> {
        let path = resolve_path("/members/{id}", &[("id", account_id)])?;
        let op = OperationRequest::rest("DeleteMember", Method::Delete, path);
        Ok(self.client.invoke_empty(op).await?)
    }

    /// Disassociate a member account from the administrator.
    pub async fn disassociate_member(&self, account_id: &str) -> Result<(), MacieError> {
        let path = resolve_path("/members/disassociate/{id}", &[("id", account_id)])?;
        let op = OperationRequest::rest("DisassociateMember", Method::Post, path);
        Ok(self.client.invoke_empty(op).await?)
    }

    /// Invite accounts to become members.
    pub async fn create_invitations(
        &self,
        request: CreateInvitationsRequest,
    ) -> Result<UnprocessedAccountsOutput, MacieError> {
        let op = OperationRequest::rest("CreateInvitations", Method::Post, "/invitations")
            .with_json_body(&request)?;

        let output: UnprocessedAccountsOutput = self.client.invoke_json(op).await?;
        report_unprocessed("CreateInvitations", &output);
        Ok(output)
    }

    /// List invitations received by the calling account.
    pub async fn list_invitations(
        &self,
        request: ListRequest,
    ) -> Result<ListInvitationsOutput, MacieError> {
        let op = with_pagination(
            OperationRequest::rest("ListInvitations", Method::Get, "/invitations"),
            &request,
        );
        Ok(self.client.invoke_json(op).await?)
    }

    /// Accept an invitation from an administrator account.
    pub async fn accept_invitation(
        &self,
        request: AcceptInvitationRequest,
    ) -> Result<(), MacieError> {
        let op = OperationRequest::rest("AcceptInvitation", Method::Post, "/invitations/accept")
            .with_json_body(&request)?;

        self.client.invoke_empty(op).await?;
        info!(administrator = %request.master_account, "Accepted invitation");
        Ok(())
    }

    /// Decline invitations from the given accounts.
    pub async fn decline_invitations(
        &self,
        account_ids: &[String],
    ) -> Result<UnprocessedAccountsOutput, MacieError> {
        let op = OperationRequest::rest("DeclineInvitations", Method::Post, "/invitations/decline")
            .with_json_body(&AccountIdsBody { account_ids })?;

        let output: UnprocessedAccountsOutput = self.client.invoke_json(op).await?;
        report_unprocessed("DeclineInvitations", &output);
        Ok(output)
    }

    /// Delete invitations from the given accounts.
    pub async fn delete_invitations(
        &self,
        account_ids: &[String],
    ) -> Result<UnprocessedAccountsOutput, MacieError> {
        let op = OperationRequest::rest("DeleteInvitations", Method::Post, "/invitations/delete")
            .with_json_body(&AccountIdsBody { account_ids })?;

        let output: UnprocessedAccountsOutput = self.client.invoke_json(op).await?;
        report_unprocessed("DeleteInvitations", &output);
        Ok(output)
    }

    /// Count pending invitations.
    pub async fn get_invitations_count(&self) -> Result<GetInvitationsCountOutput, MacieError> {
        let op = OperationRequest::rest("GetInvitationsCount", Method::Get, "/invitations/count");
        Ok(self.client.invoke_json(op).await?)
    }

    /// Get the administrator account of the calling account.
    pub async fn get_master_account(&self) -> Result<GetMasterAccountOutput, MacieError> {
        let op = OperationRequest::rest("GetMasterAccount", Method::Get, "/master");
        Ok(self.client.invoke_json(op).await?)
    }

    /// Leave the administrator account.
    pub async fn disassociate_from_master_account(&self) -> Result<(), MacieError> {
        let op = OperationRequest::rest(
            "DisassociateFromMasterAccount",
            Method::Post,
            "/master/disassociate",
        );
        Ok(self.client.invoke_empty(op).await?)
    }
}

fn report_unprocessed(operation: &str, output: &UnprocessedAccountsOutput) {
    for account in &output.unprocessed_accounts {
        warn!(
            operation,
            account = ?account.account_id,
            code = ?account.error_code,
            message = ?account.error_message,
            "Account not processed"
        );
    }
}
