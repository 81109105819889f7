//! Integration tests for the document synchronizer.
//!
//! These tests drive the real DocumentSynchronizer through the IndexingService
//! surface with mock dependencies (SearchIndexProvider, WikiTrash and
//! QuestionDirectory) recording what would have been sent.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use es_indexer::{
    DocumentSynchronizer, IdentifierResolver, IndexingService, QuestionDirectory, ResolutionError,
    WikiTrash,
};
use es_indexer_repository::{DocumentTarget, SearchIndexError, SearchIndexProvider};
use es_indexer_shared::{
    content_keys, Content, ContentBag, ContentNode, Document, Profile, Question, SearchEntry,
    SearchEntryKey, SocialProfile, Space, Topic, WikiPage,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Index(DocumentTarget, Option<Value>),
    Delete(DocumentTarget),
}

// Mock SearchIndexProvider recording every request
#[derive(Default)]
struct MockSearchProvider {
    calls: Mutex<Vec<Call>>,
    should_error: bool,
}

impl MockSearchProvider {
    fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            should_error: true,
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchIndexProvider for MockSearchProvider {
    async fn index_document(
        &self,
        target: &DocumentTarget,
        document: Option<&Document>,
    ) -> Result<(), SearchIndexError> {
        self.calls.lock().unwrap().push(Call::Index(
            target.clone(),
            document.map(|doc| doc.clone().into_value()),
        ));
        if self.should_error {
            return Err(SearchIndexError::connection("Connection refused"));
        }
        Ok(())
    }

    async fn delete_document(&self, target: &DocumentTarget) -> Result<(), SearchIndexError> {
        self.calls.lock().unwrap().push(Call::Delete(target.clone()));
        if self.should_error {
            return Err(SearchIndexError::connection("Connection refused"));
        }
        Ok(())
    }
}

// Mock WikiTrash keyed by (wiki type, owner, page name)
#[derive(Default)]
struct MockTrash {
    pages: HashMap<(String, String, String), WikiPage>,
    lookups: Mutex<Vec<(String, String, String)>>,
}

impl MockTrash {
    fn with_page(mut self, wiki_type: &str, owner: &str, name: &str, uuid: &str) -> Self {
        let page = WikiPage {
            node_uuid: Some(uuid.to_string()),
            ..Default::default()
        };
        self.pages
            .insert((wiki_type.to_string(), owner.to_string(), name.to_string()), page);
        self
    }
}

#[async_trait]
impl WikiTrash for MockTrash {
    async fn trash_page(
        &self,
        wiki_type: &str,
        wiki_owner: &str,
        page_name: &str,
    ) -> Result<Option<WikiPage>, ResolutionError> {
        let key = (
            wiki_type.to_string(),
            wiki_owner.to_string(),
            page_name.to_string(),
        );
        self.lookups.lock().unwrap().push(key.clone());
        Ok(self.pages.get(&key).cloned())
    }
}

// Mock QuestionDirectory: question id -> linked activity id
#[derive(Default)]
struct MockQuestions {
    links: Vec<(String, Option<String>)>,
    should_error: bool,
    failing_question: Option<String>,
}

impl MockQuestions {
    fn new(links: &[(&str, Option<&str>)]) -> Self {
        Self {
            links: links
                .iter()
                .map(|(q, a)| (q.to_string(), a.map(str::to_string)))
                .collect(),
            should_error: false,
            failing_question: None,
        }
    }
}

#[async_trait]
impl QuestionDirectory for MockQuestions {
    async fn all_questions(&self) -> Result<Vec<Question>, ResolutionError> {
        if self.should_error {
            return Err(ResolutionError::lookup("Question store unavailable"));
        }
        Ok(self
            .links
            .iter()
            .map(|(id, _)| Question {
                id: id.clone(),
                ..Default::default()
            })
            .collect())
    }

    async fn activity_id_for_question(
        &self,
        question_id: &str,
    ) -> Result<Option<String>, ResolutionError> {
        if self.failing_question.as_deref() == Some(question_id) {
            return Err(ResolutionError::lookup("Activity lookup failed"));
        }
        Ok(self
            .links
            .iter()
            .find(|(id, _)| id == question_id)
            .and_then(|(_, activity)| activity.clone()))
    }
}

fn setup(
    trash: MockTrash,
    questions: MockQuestions,
) -> (DocumentSynchronizer, Arc<MockSearchProvider>, Arc<MockTrash>) {
    let provider = Arc::new(MockSearchProvider::default());
    let trash = Arc::new(trash);
    let resolver = IdentifierResolver::new(trash.clone(), Arc::new(questions));
    (
        DocumentSynchronizer::new(provider.clone(), resolver),
        provider,
        trash,
    )
}

fn default_setup() -> (DocumentSynchronizer, Arc<MockSearchProvider>) {
    let (sync, provider, _) = setup(MockTrash::default(), MockQuestions::default());
    (sync, provider)
}

fn indexed(call: &Call) -> (&DocumentTarget, &Value) {
    match call {
        Call::Index(target, Some(body)) => (target, body),
        other => panic!("Expected index call with a document, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_collection_sends_nothing() {
    let (sync, provider) = default_setup();
    let key = SearchEntryKey::new("poll", "poll", "poll-1");
    let bag = ContentBag::new().with(content_keys::SPACE, Content::Space(Space::default()));

    sync.add(&SearchEntry::new(key.clone(), bag.clone())).await;
    sync.update(&key, &bag).await;
    sync.delete(&key).await;

    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_forum_topic_document_shape() {
    let (sync, provider) = default_setup();
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let topic = Topic {
        id: "topic-7".to_string(),
        name: "Release planning".to_string(),
        description: "Q2 scope".to_string(),
        owner: "mary".to_string(),
        link: "/forum/topic/topic-7".to_string(),
        category_id: "cat-1".to_string(),
        forum_id: "forum-2".to_string(),
        created_date: Some(created),
        modified_date: None,
    };
    let entry = SearchEntry::new(
        SearchEntryKey::new("forum", "topic", "topic-7"),
        ContentBag::new().with(content_keys::TOPIC, Content::Topic(topic)),
    );

    sync.add(&entry).await;

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    let (target, body) = indexed(&calls[0]);
    assert_eq!(target.path(), "/forum/topic/topic-7");
    assert_eq!(
        body,
        &json!({
            "title": "Release planning",
            "description": "Q2 scope",
            "createdDate": created.timestamp_millis(),
            "updatedDate": null,
            "owner": "mary",
            "url": "/forum/topic/topic-7",
            "category": "cat-1",
            "forum": "forum-2"
        })
    );
}

#[tokio::test]
async fn test_space_without_member_lists() {
    let (sync, provider) = default_setup();
    let space = Space {
        display_name: "Engineering".to_string(),
        group_id: "/spaces/engineering".to_string(),
        ..Default::default()
    };
    let entry = SearchEntry::new(
        SearchEntryKey::new("social", "space", "engineering"),
        ContentBag::new().with(content_keys::SPACE, Content::Space(space)),
    );

    sync.add(&entry).await;

    let calls = provider.calls();
    let (_, body) = indexed(&calls[0]);
    for field in ["managers", "members", "invitedUsers", "pendingUsers"] {
        assert_eq!(body[field], json!([]), "field {}", field);
    }
    assert_eq!(body["group"], json!("/spaces/engineering"));
}

#[tokio::test]
async fn test_content_without_owner() {
    let (sync, provider) = default_setup();
    let node = ContentNode::new("/sites/intranet/documents/report")
        .with_property("exo:title", "Annual report")
        .with_property("exo:dateCreated", "2024-01-01")
        .with_property("exo:dateModified", "2024-02-01")
        .with_property("jcr:primaryType", "exo:article")
        .with_property("publication:currentState", "published");
    let entry = SearchEntry::new(
        SearchEntryKey::new("content", "file", "report"),
        ContentBag::new().with(content_keys::CONTENT, Content::Node(node)),
    );

    sync.add(&entry).await;

    let calls = provider.calls();
    let (target, body) = indexed(&calls[0]);
    assert_eq!(target.path(), "/content/file/report");
    assert_eq!(
        body,
        &json!({
            "title": "Annual report",
            "dateCreated": "2024-01-01",
            "dateModified": "2024-02-01",
            "owner": "",
            "contentType": "exo:article",
            "publicationState": "published"
        })
    );
}

#[tokio::test]
async fn test_content_with_multi_valued_property() {
    let (sync, provider) = default_setup();
    let node = ContentNode::new("/sites/intranet/documents/report")
        .with_property("exo:title", "Annual report")
        .with_values(
            "exo:owner",
            vec!["mary".to_string(), "john".to_string()],
        );
    let entry = SearchEntry::new(
        SearchEntryKey::new("content", "file", "report"),
        ContentBag::new().with(content_keys::CONTENT, Content::Node(node)),
    );

    sync.add(&entry).await;

    let calls = provider.calls();
    let (_, body) = indexed(&calls[0]);
    assert_eq!(body["title"], json!("Annual report"));
    assert_eq!(body["owner"], json!(""));
}

#[tokio::test]
async fn test_wiki_add_targets_page_uuid() {
    let (sync, provider) = default_setup();
    let page = WikiPage {
        title: "Home".to_string(),
        owner: "intranet".to_string(),
        node_uuid: Some("6f1c0a7e-uuid".to_string()),
        ..Default::default()
    };
    let entry = SearchEntry::new(
        SearchEntryKey::new("wiki", "portal", "WikiHome"),
        ContentBag::new().with(content_keys::PAGE, Content::Page(page)),
    );

    sync.add(&entry).await;

    let calls = provider.calls();
    let (target, body) = indexed(&calls[0]);
    assert_eq!(target.path(), "/wiki/portal/6f1c0a7e-uuid");
    assert_eq!(body["title"], json!("Home"));
}

#[tokio::test]
async fn test_wiki_delete_looks_up_trash() {
    let trash = MockTrash::default().with_page("portal", "intranet", "WikiHome", "uuid-9");
    let (sync, provider, trash) = setup(trash, MockQuestions::default());

    sync.delete(&SearchEntryKey::new("wiki", "portal", "WikiHome"))
        .await;

    assert_eq!(
        provider.calls(),
        vec![Call::Delete(DocumentTarget::new("wiki", "portal", "uuid-9"))]
    );
    assert_eq!(
        trash.lookups.lock().unwrap().as_slice(),
        &[(
            "portal".to_string(),
            "intranet".to_string(),
            "WikiHome".to_string()
        )]
    );
}

#[tokio::test]
async fn test_wiki_delete_uses_configured_trash_owner() {
    let provider = Arc::new(MockSearchProvider::default());
    let trash = Arc::new(MockTrash::default().with_page("group", "extranet", "Notes", "uuid-3"));
    let resolver = IdentifierResolver::with_trash_owner(
        trash.clone(),
        Arc::new(MockQuestions::default()),
        "extranet",
    );
    let sync = DocumentSynchronizer::new(provider.clone(), resolver);

    sync.delete(&SearchEntryKey::new("wiki", "group", "Notes")).await;

    assert_eq!(
        provider.calls(),
        vec![Call::Delete(DocumentTarget::new("wiki", "group", "uuid-3"))]
    );
}

#[tokio::test]
async fn test_answer_delete_matches_activity() {
    let questions = MockQuestions::new(&[
        ("q-1", Some("activity-7")),
        ("q-2", Some("activity-42")),
        ("q-3", None),
    ]);
    let (sync, provider, _) = setup(MockTrash::default(), questions);

    sync.delete(&SearchEntryKey::new("answer", "question", "activity-42"))
        .await;

    assert_eq!(
        provider.calls(),
        vec![Call::Delete(DocumentTarget::new("answer", "question", "q-2"))]
    );
}

#[tokio::test]
async fn test_answer_delete_last_match_wins() {
    let questions = MockQuestions::new(&[
        ("q-1", Some("activity-42")),
        ("q-2", Some("activity-42")),
    ]);
    let (sync, provider, _) = setup(MockTrash::default(), questions);

    sync.delete(&SearchEntryKey::new("answer", "question", "activity-42"))
        .await;

    assert_eq!(
        provider.calls(),
        vec![Call::Delete(DocumentTarget::new("answer", "question", "q-2"))]
    );
}

#[tokio::test]
async fn test_answer_delete_without_match_uses_empty_id() {
    let questions = MockQuestions::new(&[("q-1", Some("activity-7"))]);
    let (sync, provider, _) = setup(MockTrash::default(), questions);

    sync.delete(&SearchEntryKey::new("answer", "question", "activity-42"))
        .await;

    let calls = provider.calls();
    assert_eq!(
        calls,
        vec![Call::Delete(DocumentTarget::new("answer", "question", ""))]
    );
    if let Call::Delete(target) = &calls[0] {
        assert_eq!(target.path(), "/answer/question/");
    }
}

#[tokio::test]
async fn test_answer_delete_with_failing_lookup_still_deletes() {
    let questions = MockQuestions {
        should_error: true,
        ..Default::default()
    };
    let (sync, provider, _) = setup(MockTrash::default(), questions);

    sync.delete(&SearchEntryKey::new("answer", "question", "activity-42"))
        .await;

    assert_eq!(
        provider.calls(),
        vec![Call::Delete(DocumentTarget::new("answer", "question", ""))]
    );
}

#[tokio::test]
async fn test_answer_delete_keeps_match_found_before_lookup_failure() {
    let questions = MockQuestions {
        failing_question: Some("q-2".to_string()),
        ..MockQuestions::new(&[
            ("q-1", Some("activity-42")),
            ("q-2", Some("activity-42")),
        ])
    };
    let (sync, provider, _) = setup(MockTrash::default(), questions);

    sync.delete(&SearchEntryKey::new("answer", "question", "activity-42"))
        .await;

    assert_eq!(
        provider.calls(),
        vec![Call::Delete(DocumentTarget::new("answer", "question", "q-1"))]
    );
}

#[tokio::test]
async fn test_unknown_forum_type_still_indexed() {
    let (sync, provider) = default_setup();
    let key = SearchEntryKey::new("forum", "poll", "poll-1");

    sync.add(&SearchEntry::new(key.clone(), ContentBag::new()))
        .await;
    sync.delete(&key).await;

    let target = DocumentTarget::new("forum", "poll", "poll-1");
    assert_eq!(
        provider.calls(),
        vec![
            Call::Index(target.clone(), Some(json!({}))),
            Call::Delete(target),
        ]
    );
}

#[tokio::test]
async fn test_unknown_social_type_posts_null() {
    let (sync, provider) = default_setup();
    let key = SearchEntryKey::new("social", "activity", "act-1");

    sync.add(&SearchEntry::new(key.clone(), ContentBag::new()))
        .await;
    sync.delete(&key).await;

    let target = DocumentTarget::new("social", "activity", "act-1");
    assert_eq!(
        provider.calls(),
        vec![Call::Index(target.clone(), None), Call::Delete(target)]
    );
}

#[tokio::test]
async fn test_provider_failure_is_swallowed() {
    let provider = Arc::new(MockSearchProvider::failing());
    let resolver = IdentifierResolver::new(
        Arc::new(MockTrash::default()),
        Arc::new(MockQuestions::default()),
    );
    let sync = DocumentSynchronizer::new(provider.clone(), resolver);
    let key = SearchEntryKey::new("forum", "post", "post-1");

    sync.update(&key, &ContentBag::new()).await;
    sync.delete(&key).await;

    assert_eq!(provider.calls().len(), 2);
}

#[tokio::test]
async fn test_social_profile_flattens_properties() {
    let (sync, provider) = default_setup();
    let profile = SocialProfile {
        id: "john".to_string(),
        properties: BTreeMap::from([("nickname".to_string(), json!("joe"))]),
    };
    let entry = SearchEntry::new(
        SearchEntryKey::new("social", "profile", "john"),
        ContentBag::new().with(
            content_keys::PROFILE,
            Content::Profile(Profile::Social(profile)),
        ),
    );

    sync.add(&entry).await;

    let calls = provider.calls();
    let (target, body) = indexed(&calls[0]);
    assert_eq!(target.path(), "/social/profile/john");
    assert_eq!(body, &json!({"username": "john", "nickname": "joe"}));
    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys[0], "username");
}

#[tokio::test]
async fn test_wrong_content_kind_posts_null() {
    let (sync, provider) = default_setup();
    let key = SearchEntryKey::new("forum", "topic", "topic-9");
    let bag = ContentBag::new().with(content_keys::TOPIC, Content::Space(Space::default()));

    sync.update(&key, &bag).await;

    assert_eq!(
        provider.calls(),
        vec![Call::Index(
            DocumentTarget::new("forum", "topic", "topic-9"),
            None
        )]
    );
}

#[tokio::test]
async fn test_content_delete_uses_name() {
    let (sync, provider) = default_setup();

    sync.delete(&SearchEntryKey::new("content", "file", "report"))
        .await;

    assert_eq!(
        provider.calls(),
        vec![Call::Delete(DocumentTarget::new("content", "file", "report"))]
    );
}

#[tokio::test]
async fn test_concurrent_operations_are_independent() {
    let (sync, provider) = default_setup();
    let sync = Arc::new(sync);

    let mut handles = Vec::new();
    for i in 0..8 {
        let sync = sync.clone();
        handles.push(tokio::spawn(async move {
            let key = SearchEntryKey::new("forum", "post", format!("post-{}", i));
            sync.delete(&key).await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let mut paths: Vec<String> = provider
        .calls()
        .iter()
        .map(|call| match call {
            Call::Delete(target) => target.path(),
            other => panic!("Unexpected call {:?}", other),
        })
        .collect();
    paths.sort();
    assert_eq!(paths.len(), 8);
    assert_eq!(paths[0], "/forum/post/post-0");
}
