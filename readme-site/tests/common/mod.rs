#![allow(dead_code)]

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use readme_site::{
    ClientError, ListRequest, Readme, RepositoryClient, RepositoryPage, RepositoryRecord,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// Encodes `text` the way the contents API serves it: base64 wrapped at 60
/// characters.
pub fn encoded_readme(text: &str) -> Readme {
    let encoded = STANDARD.encode(text.as_bytes());
    let lines: Vec<&str> = encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect();
    Readme {
        content: lines.join("\n"),
        encoding: "base64".to_string(),
    }
}

/// How a scripted README request behaves.
#[derive(Clone)]
pub enum ReadmeScript {
    Found(Readme),
    Missing,
    Hang,
}

/// A call the fake observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListOrg { owner: String, page: u32 },
    ListUser { owner: String, page: u32 },
    Readme { owner: String, repo: String },
}

/// In-memory [`RepositoryClient`] serving scripted pages and READMEs.
#[derive(Default)]
pub struct FakeClient {
    pages: Vec<Result<Vec<String>, String>>,
    readmes: HashMap<String, ReadmeScript>,
    calls: Mutex<Vec<Call>>,
    barrier: Option<Arc<Barrier>>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeClient {
    /// Serves `pages` in order, each page linking to the next.
    pub fn with_pages(pages: Vec<Vec<&str>>) -> Self {
        let mut client = Self::default();
        for page in pages {
            let names: Vec<String> = page.iter().map(|s| s.to_string()).collect();
            for name in &names {
                client.readmes.insert(
                    name.clone(),
                    ReadmeScript::Found(encoded_readme(&format!("# {name}\n"))),
                );
            }
            client.pages.push(Ok(names));
        }
        client
    }

    /// Makes listing page `page` (1-based) fail.
    pub fn failing_page(mut self, page: usize) -> Self {
        self.pages[page - 1] = Err(format!("page {page} unavailable"));
        self
    }

    /// Scripts the README of `repo`.
    pub fn readme(mut self, repo: &str, script: ReadmeScript) -> Self {
        self.readmes.insert(repo.to_string(), script);
        self
    }

    /// Every README request waits until `parties` requests are in flight.
    pub fn rendezvous(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// Every README request takes at least `delay`.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn readme_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Readme { .. }))
            .count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn page(&self, request: ListRequest) -> Result<RepositoryPage, ClientError> {
        let index = request.page as usize - 1;
        let names = self.pages[index]
            .clone()
            .map_err(|message| ClientError::Unavailable { message })?;
        let next_page = if index + 1 < self.pages.len() {
            request.page + 1
        } else {
            0
        };
        Ok(RepositoryPage {
            records: names.into_iter().map(RepositoryRecord::new).collect(),
            next_page,
        })
    }
}

#[async_trait]
impl RepositoryClient for FakeClient {
    async fn list_org_repositories(
        &self,
        org: &str,
        request: ListRequest,
    ) -> Result<RepositoryPage, ClientError> {
        self.calls.lock().unwrap().push(Call::ListOrg {
            owner: org.to_string(),
            page: request.page,
        });
        self.page(request)
    }

    async fn list_user_repositories(
        &self,
        user: &str,
        request: ListRequest,
    ) -> Result<RepositoryPage, ClientError> {
        self.calls.lock().unwrap().push(Call::ListUser {
            owner: user.to_string(),
            page: request.page,
        });
        self.page(request)
    }

    async fn get_readme(&self, owner: &str, repo: &str) -> Result<Readme, ClientError> {
        self.calls.lock().unwrap().push(Call::Readme {
            owner: owner.to_string(),
            repo: repo.to_string(),
        });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let script = self
            .readmes
            .get(repo)
            .cloned()
            .unwrap_or(ReadmeScript::Missing);
        if let ReadmeScript::Hang = script {
            std::future::pending::<()>().await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match script {
            ReadmeScript::Found(readme) => Ok(readme),
            ReadmeScript::Missing | ReadmeScript::Hang => Err(ClientError::ReadmeNotFound {
                owner: owner.to_string(),
                repo: repo.to_string(),
            }),
        }
    }
}

/// Names of the `.md` files in `dir`, sorted.
pub fn written_files(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .filter(|name| name.ends_with(".md"))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
