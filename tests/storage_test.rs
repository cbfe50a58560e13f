use bytes::Bytes;

use maloy::application::ports::{BlobStore, BlobStoreError};
use maloy::domain::{DocumentId, ReportId, StoragePath, REPORT_FILENAME};
use maloy::infrastructure::storage::LocalBlobStore;

fn create_test_store() -> (tempfile::TempDir, LocalBlobStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalBlobStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_stored_blob_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_upload(&DocumentId::new(), "data.csv");

    store
        .put(&path, Bytes::from_static(b"a,b\n1,2\n"))
        .await
        .unwrap();

    let fetched = store.fetch(&path).await.unwrap();
    assert_eq!(fetched, b"a,b\n1,2\n");
}

#[tokio::test]
async fn given_missing_blob_when_fetching_then_not_found_is_returned() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_artifact(&ReportId::new(), REPORT_FILENAME);

    let result = store.fetch(&path).await;

    assert!(matches!(result, Err(BlobStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_same_path_when_storing_twice_then_last_write_wins() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_upload(&DocumentId::new(), "note.txt");

    store.put(&path, Bytes::from_static(b"first")).await.unwrap();
    store.put(&path, Bytes::from_static(b"second")).await.unwrap();

    assert_eq!(store.fetch(&path).await.unwrap(), b"second");
}
