//! Resolution of the search engine document id for an entry.
//!
//! Most families use the key's `name` as document id. Two do not:
//!
//! - **wiki**: page names change over a page's life, so the durable node uuid
//!   is used. On delete the live page is gone and the uuid is read from the
//!   page in the wiki trash.
//! - **answer**: deletes carry the id of the question's social activity rather
//!   than the question id, so all questions are scanned for the one linked to
//!   that activity.

use std::sync::Arc;

use async_trait::async_trait;
use es_indexer_shared::{content_keys, Content, ContentBag, Question, SearchEntryKey, WikiPage};
use tracing::{debug, warn};

use crate::errors::ResolutionError;
use crate::mapper::extract;
use crate::router::Route;

/// Wiki owner whose trash is searched for deleted pages.
pub const DEFAULT_WIKI_TRASH_OWNER: &str = "intranet";

/// Read access to deleted wiki pages.
#[async_trait]
pub trait WikiTrash: Send + Sync {
    /// Find a page by name in the trash of the wiki `wiki_type`/`wiki_owner`.
    async fn trash_page(
        &self,
        wiki_type: &str,
        wiki_owner: &str,
        page_name: &str,
    ) -> Result<Option<WikiPage>, ResolutionError>;
}

/// Read access to the Q&A service.
#[async_trait]
pub trait QuestionDirectory: Send + Sync {
    /// Every question in the system.
    async fn all_questions(&self) -> Result<Vec<Question>, ResolutionError>;

    /// Id of the social activity published for a question, if any.
    async fn activity_id_for_question(
        &self,
        question_id: &str,
    ) -> Result<Option<String>, ResolutionError>;
}

/// Computes target document ids per content family.
pub struct IdentifierResolver {
    wiki_trash: Arc<dyn WikiTrash>,
    questions: Arc<dyn QuestionDirectory>,
    wiki_trash_owner: String,
}

impl IdentifierResolver {
    /// Create a resolver searching the default wiki owner's trash.
    pub fn new(wiki_trash: Arc<dyn WikiTrash>, questions: Arc<dyn QuestionDirectory>) -> Self {
        Self::with_trash_owner(wiki_trash, questions, DEFAULT_WIKI_TRASH_OWNER)
    }

    /// Create a resolver searching the trash of the given wiki owner.
    pub fn with_trash_owner(
        wiki_trash: Arc<dyn WikiTrash>,
        questions: Arc<dyn QuestionDirectory>,
        wiki_trash_owner: impl Into<String>,
    ) -> Self {
        Self {
            wiki_trash,
            questions,
            wiki_trash_owner: wiki_trash_owner.into(),
        }
    }

    pub fn wiki_trash_owner(&self) -> &str {
        &self.wiki_trash_owner
    }

    /// Id of the document written by an add or update.
    pub fn resolve_for_upsert(
        &self,
        route: Route,
        key: &SearchEntryKey,
        bag: &ContentBag,
    ) -> Result<String, ResolutionError> {
        match route {
            Route::Wiki => {
                let page = extract(bag, content_keys::PAGE, "wiki page", Content::as_page)?;
                page_uuid(page, &key.name)
            }
            _ => Ok(key.name.clone()),
        }
    }

    /// Id of the document removed by a delete.
    pub async fn resolve_for_delete(
        &self,
        route: Route,
        key: &SearchEntryKey,
    ) -> Result<String, ResolutionError> {
        match route {
            Route::Wiki => self.trashed_page_uuid(key).await,
            Route::Answer => self.question_for_activity(&key.name).await,
            _ => Ok(key.name.clone()),
        }
    }

    async fn trashed_page_uuid(&self, key: &SearchEntryKey) -> Result<String, ResolutionError> {
        let page = self
            .wiki_trash
            .trash_page(&key.entry_type, &self.wiki_trash_owner, &key.name)
            .await?
            .ok_or_else(|| ResolutionError::PageNotInTrash {
                wiki_type: key.entry_type.clone(),
                wiki_owner: self.wiki_trash_owner.clone(),
                page: key.name.clone(),
            })?;

        page_uuid(&page, &key.name)
    }

    /// Scan all questions for the one linked to `activity_id`.
    ///
    /// Linear in the number of questions. When several match, the last one
    /// wins. A lookup failure stops the scan and returns the match found so
    /// far, or the failure when there is none.
    async fn question_for_activity(&self, activity_id: &str) -> Result<String, ResolutionError> {
        let questions = self.questions.all_questions().await?;
        debug!(
            activity_id = %activity_id,
            question_count = questions.len(),
            "Scanning questions for activity"
        );

        let mut matched = None;
        for question in questions {
            let linked = match self.questions.activity_id_for_question(&question.id).await {
                Ok(linked) => linked,
                // A failed lookup ends the scan; a match found so far still counts.
                Err(e) => match matched {
                    Some(id) => {
                        warn!(
                            activity_id = %activity_id,
                            question_id = %question.id,
                            error = %e,
                            "Question scan interrupted, keeping earlier match"
                        );
                        return Ok(id);
                    }
                    None => return Err(e),
                },
            };
            if linked.as_deref() == Some(activity_id) {
                matched = Some(question.id);
            }
        }

        matched.ok_or_else(|| ResolutionError::NoMatchingQuestion {
            activity_id: activity_id.to_string(),
        })
    }
}

fn page_uuid(page: &WikiPage, name: &str) -> Result<String, ResolutionError> {
    page.node_uuid
        .clone()
        .ok_or_else(|| ResolutionError::PageUuidUnavailable {
            page: name.to_string(),
        })
}
