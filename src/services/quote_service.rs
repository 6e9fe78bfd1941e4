use rand::Rng;
use crate::errors::{AppError, AppResult, StoreError, StoreResult};
use crate::models::{Character, Quote};
use crate::store::Store;

/// Characters and their quotes.
pub struct QuoteService {
    characters: Store<Character>,
    quotes: Store<Quote>,
}

impl QuoteService {
    pub fn new(characters: Store<Character>, quotes: Store<Quote>) -> Self {
        Self { characters, quotes }
    }

    pub async fn ensure(&self) -> StoreResult<()> {
        self.characters.ensure().await?;
        self.quotes.ensure().await
    }

    pub async fn list_characters(&self) -> AppResult<Vec<Character>> {
        let characters = self.characters.all().await?;
        if characters.is_empty() {
            return Err(AppError::NotFound("No characters found".into()));
        }
        Ok(characters)
    }

    pub async fn get_character(&self, name: &str) -> AppResult<Character> {
        let wanted = name.to_lowercase();
        self.characters
            .find(|c| c.name.to_lowercase() == wanted)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".into()))
    }

    pub async fn create_character(&self, character: &Character) -> AppResult<()> {
        self.characters
            .append(character)
            .await
            .map_err(|e| write_failure(self.characters.label(), e))?;
        tracing::info!("Character added: {}", character.name);
        Ok(())
    }

    pub async fn create_quote(&self, quote: &Quote) -> AppResult<()> {
        self.quotes
            .append(quote)
            .await
            .map_err(|e| write_failure(self.quotes.label(), e))?;
        tracing::info!("Quote added for {}", quote.author);
        Ok(())
    }

    /// Picks one stored quote uniformly at random.
    pub async fn random_quote(&self) -> AppResult<Quote> {
        let mut quotes = self.quotes.all().await?;
        if quotes.is_empty() {
            return Err(AppError::NotFound("No quotes available".into()));
        }
        let index = rand::thread_rng().gen_range(0..quotes.len());
        Ok(quotes.swap_remove(index))
    }

    pub async fn quotes_by_author(&self, author: &str) -> AppResult<Vec<String>> {
        let quotes = self.quotes.all().await?;
        if quotes.is_empty() {
            return Err(AppError::NotFound("No quotes available".into()));
        }

        let texts: Vec<String> = quotes
            .into_iter()
            .filter(|q| q.is_by(author))
            .map(|q| q.text)
            .collect();

        if texts.is_empty() {
            return Err(AppError::NotFound(format!("No quotes found for author: {}", author)));
        }
        tracing::debug!("Found {} quotes by {}", texts.len(), author);
        Ok(texts)
    }
}

impl Clone for QuoteService {
    fn clone(&self) -> Self {
        Self {
            characters: self.characters.clone(),
            quotes: self.quotes.clone(),
        }
    }
}

fn write_failure(label: &str, err: StoreError) -> AppError {
    if err.is_permission_denied() {
        AppError::WriteDenied(format!("Permission denied: Unable to write to {}", label))
    } else {
        AppError::Internal(format!("An error occurred: {}", err))
    }
}
