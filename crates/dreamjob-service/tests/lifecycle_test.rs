//! End-to-end lifecycle of a candidate and its file over real storage.

use std::collections::HashSet;
use std::sync::Arc;

use bytes::Bytes;

use dreamjob_database::RepositoryManager;
use dreamjob_entity::candidate::Candidate;
use dreamjob_entity::file::FileContent;
use dreamjob_service::{CandidateService, FileService};
use dreamjob_storage::LocalBlobStore;

struct Harness {
    dir: tempfile::TempDir,
    files: Arc<FileService>,
    candidates: CandidateService,
}

async fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path().to_str().unwrap())
        .await
        .unwrap();
    let repos = RepositoryManager::in_memory();
    let files = Arc::new(FileService::new(Arc::new(store), repos.files()));
    let candidates = CandidateService::new(repos.candidates(), files.clone());
    Harness {
        dir,
        files,
        candidates,
    }
}

fn blobs_on_disk(dir: &tempfile::TempDir) -> usize {
    std::fs::read_dir(dir.path()).unwrap().count()
}

#[tokio::test]
async fn test_create_replace_delete_scenario() {
    let h = harness().await;

    let a = FileContent::new("a.txt", Bytes::from_static(&[1, 2, 3]));
    let candidate = h
        .candidates
        .create(Candidate::new("Ann", "backend developer", 1), a.clone())
        .await
        .unwrap();
    assert_eq!(candidate.file_id, 1);
    assert_eq!(h.files.fetch(1).await.unwrap(), Some(a));

    let b = FileContent::new("b.txt", Bytes::from_static(&[4, 5]));
    assert!(h.candidates.update(candidate.clone(), b.clone()).await.unwrap());
    let candidate = h.candidates.find_by_id(candidate.id).await.unwrap().unwrap();
    assert_eq!(candidate.file_id, 2);
    assert_eq!(h.files.fetch(1).await.unwrap(), None);
    assert_eq!(h.files.fetch(2).await.unwrap(), Some(b));
    assert_eq!(blobs_on_disk(&h.dir), 1);

    assert!(h.candidates.delete(candidate.id).await.unwrap());
    assert_eq!(h.files.fetch(2).await.unwrap(), None);
    assert_eq!(blobs_on_disk(&h.dir), 0);
}

#[tokio::test]
async fn test_candidates_never_share_a_file() {
    let h = harness().await;

    let mut file_ids = HashSet::new();
    for name in ["Ann", "Bob", "Cid"] {
        let stored = h
            .candidates
            .create(
                Candidate::new(name, "", 2),
                FileContent::new("cv.pdf", name.as_bytes().to_vec()),
            )
            .await
            .unwrap();
        assert!(file_ids.insert(stored.file_id));
    }

    let listed = h.candidates.find_all().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
    for candidate in &listed {
        let content = h.files.fetch(candidate.file_id).await.unwrap().unwrap();
        assert_eq!(content.data, candidate.name.as_bytes());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_keep_files_consistent() {
    let h = harness().await;
    let candidates = Arc::new(h.candidates.clone());

    let mut handles = Vec::new();
    for i in 0..20 {
        let candidates = Arc::clone(&candidates);
        handles.push(tokio::spawn(async move {
            candidates
                .create(
                    Candidate::new(format!("c{i}"), "", 1),
                    FileContent::new("same.txt", format!("body-{i}")),
                )
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        let stored = handle.await.unwrap();
        let content = h.files.fetch(stored.file_id).await.unwrap().unwrap();
        assert_eq!(content.data, format!("body-{}", &stored.name[1..]).as_bytes());
    }
    assert_eq!(blobs_on_disk(&h.dir), 20);
}
