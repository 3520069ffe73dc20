use crate::{
    model::wallet::WalletJournalEntryDto,
    server::{error::Error, service::esi::EsiApi},
};

impl EsiApi {
    /// First page of the character's wallet journal, newest entries first.
    pub async fn get_wallet_journal(
        &self,
        access_token: &str,
        character_id: i64,
    ) -> Result<Vec<WalletJournalEntryDto>, Error> {
        let path = format!("/characters/{}/wallet/journal", character_id);

        Ok(self.get(&path, access_token).await?)
    }
}
