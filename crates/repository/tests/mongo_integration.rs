//! MongoDB integration tests
//!
//! These tests share one MongoDB container. Docker must be available.
//! Run with:
//!
//! ```bash
//! cargo test -p repository --test mongo_integration
//! ```

use std::sync::Arc;

use bson::doc;
use domain::Customer;
use mongodb::Client;
use repository::{CustomerError, CustomerRepository, EntityId, MongoCustomerRepository};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::mongo::Mongo;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Mongo>,
    connection_string: String,
}

static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Mongo::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(27017).await.unwrap();

            Arc::new(ContainerInfo {
                container,
                connection_string: format!("mongodb://{host}:{port}"),
            })
        })
        .await
        .clone()
}

async fn get_test_repository() -> MongoCustomerRepository {
    let info = get_container_info().await;
    MongoCustomerRepository::connect(&info.connection_string)
        .await
        .unwrap()
}

#[tokio::test]
async fn add_and_get_customer() {
    let repo = get_test_repository().await;
    let customer = Customer::new("Adhiana").unwrap();

    repo.add(customer.clone()).await.unwrap();

    let found = repo.get(customer.id()).await.unwrap();
    assert_eq!(found.id(), customer.id());
    assert_eq!(found.name(), "Adhiana");
}

#[tokio::test]
async fn get_unknown_customer_is_not_found() {
    let repo = get_test_repository().await;

    let result = repo.get(EntityId::new()).await;
    assert!(matches!(result, Err(CustomerError::NotFound { .. })));
}

#[tokio::test]
async fn update_sets_the_name() {
    let repo = get_test_repository().await;
    let mut customer = Customer::new("Adhiana").unwrap();
    repo.add(customer.clone()).await.unwrap();

    customer.set_name("Senyamiku");
    repo.update(customer.clone()).await.unwrap();

    assert_eq!(repo.get(customer.id()).await.unwrap().name(), "Senyamiku");
}

#[tokio::test]
async fn delete_removes_the_document() {
    let repo = get_test_repository().await;
    let customer = Customer::new("SeeU").unwrap();
    repo.add(customer.clone()).await.unwrap();

    repo.delete(&customer).await.unwrap();

    let remaining = repo
        .collection()
        .count_documents(doc! { "name": "SeeU" })
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    assert!(matches!(
        repo.get(customer.id()).await,
        Err(CustomerError::NotFound { .. })
    ));
}

#[tokio::test]
async fn add_same_customer_twice_fails() {
    let repo = get_test_repository().await;
    let customer = Customer::new("Adhiana").unwrap();
    repo.add(customer.clone()).await.unwrap();

    let result = repo.add(customer.clone()).await;
    assert!(matches!(
        result,
        Err(CustomerError::FailedToAdd { id, source: Some(_) }) if id == customer.id()
    ));

    let stored = repo
        .collection()
        .count_documents(doc! { "id": bson::Uuid::from_uuid_1(customer.id().as_uuid()) })
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn delete_after_rejected_duplicate_leaves_nothing_behind() {
    let repo = get_test_repository().await;
    let customer = Customer::new("Senyamiku").unwrap();
    repo.add(customer.clone()).await.unwrap();
    assert!(repo.add(customer.clone()).await.is_err());

    repo.delete(&customer).await.unwrap();

    assert!(matches!(
        repo.get(customer.id()).await,
        Err(CustomerError::NotFound { .. })
    ));
}

#[tokio::test]
async fn update_never_added_customer_fails() {
    let repo = get_test_repository().await;
    let customer = Customer::new("Adhiana").unwrap();

    let result = repo.update(customer.clone()).await;
    assert!(matches!(
        result,
        Err(CustomerError::Update { id, source: None }) if id == customer.id()
    ));
}

#[tokio::test]
async fn delete_never_added_customer_fails() {
    let repo = get_test_repository().await;
    let customer = Customer::new("Adhiana").unwrap();

    let result = repo.delete(&customer).await;
    assert!(matches!(
        result,
        Err(CustomerError::Delete { id, source: None }) if id == customer.id()
    ));
}

#[tokio::test]
async fn connect_twice_keeps_the_index() {
    let info = get_container_info().await;
    let first = MongoCustomerRepository::connect(&info.connection_string)
        .await
        .unwrap();
    let second = MongoCustomerRepository::connect(&info.connection_string)
        .await
        .unwrap();
    second.ensure_indexes().await.unwrap();

    let customer = Customer::new("SeeU again").unwrap();
    first.add(customer.clone()).await.unwrap();
    assert!(second.add(customer).await.is_err());
}

#[tokio::test]
async fn unreachable_server_surfaces_as_domain_error() {
    // Nothing listens on port 1; server selection gives up quickly.
    // Binding without `connect` skips the index round trip.
    let client = Client::with_uri_str(
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
    )
    .await
    .unwrap();
    let repo = MongoCustomerRepository::new(&client);
    let customer = Customer::new("Adhiana").unwrap();

    let result = repo.add(customer).await;
    assert!(matches!(
        result,
        Err(CustomerError::FailedToAdd {
            source: Some(_),
            ..
        })
    ));
}
