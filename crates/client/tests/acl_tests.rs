//! ACL endpoint tests.

mod common;

use common::*;
use splunk_client::models::{Acl, Index, Perms, Sharing};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_update_acl_posts_to_acl_action() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/servicesNS/admin/search/data/indexes/web/acl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("indexes/read_index.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server);
    let acl = Acl {
        app: "search".into(),
        owner: "admin".into(),
        sharing: Sharing::Global,
        perms: Some(Perms {
            read: vec!["*".into()],
            write: vec!["admin".into(), "power".into()],
        }),
    };
    let id = ObjectId::new(Namespace::user("admin", "search"), "web");
    client.update_acl::<Index>(&id, &acl).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        form_pairs(&requests[0].body),
        vec![
            ("owner".to_string(), "admin".to_string()),
            ("sharing".to_string(), "global".to_string()),
            ("perms.read".to_string(), "*".to_string()),
            ("perms.write".to_string(), "admin,power".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_read_acl_at_arbitrary_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/servicesNS/admin/search/saved/searches/Errors%20in%20the%20last%20hour",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("acl/saved_search.json")))
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server);
    let target = ServicePath::new(Namespace::user("admin", "search"), "saved/searches")
        .entry("Errors in the last hour");
    let acl = client.read_acl_at(&target).await.unwrap().unwrap();

    assert_eq!(acl.owner, "admin");
    assert_eq!(acl.sharing, Sharing::Global);
    assert_eq!(acl.perms.unwrap().read, vec!["*"]);
}

#[tokio::test]
async fn test_read_acl_of_missing_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server);
    let target = ServicePath::new(Namespace::default(), "saved/searches").entry("gone");
    assert!(client.read_acl_at(&target).await.unwrap().is_none());
}
