//! In-memory stores for service unit tests

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use campus_common::auth::hash_password;
use campus_common::{AdminConfig, StorageConfig};
use campus_core::entities::{
    Class, Exam, Member, NewClass, NewExam, NewMember, NewNote, NewPost, NewSeason, NewUser, Note,
    Post, Season, User,
};
use campus_core::traits::{
    ClassRepository, ExamRepository, MemberRepository, NoteRepository, PostRepository,
    RepoResult, SeasonRepository, UserRepository,
};
use campus_core::value_objects::SeasonId;
use chrono::Utc;
use parking_lot::Mutex;

use super::context::{ServiceContext, ServiceContextBuilder};
use super::storage::PhotoStorage;

#[derive(Default)]
pub struct MemoryRepos {
    pub seasons: Mutex<Vec<Season>>,
    pub classes: Mutex<Vec<Class>>,
    pub notes: Mutex<Vec<Note>>,
    pub exams: Mutex<Vec<Exam>>,
    pub posts: Mutex<Vec<Post>>,
    pub members: Mutex<Vec<Member>>,
    pub users: Mutex<Vec<User>>,
}

fn next_id(len: usize) -> i64 {
    len as i64 + 1
}

#[async_trait]
impl SeasonRepository for MemoryRepos {
    async fn find_all(&self) -> RepoResult<Vec<Season>> {
        Ok(self.seasons.lock().clone())
    }

    async fn insert(&self, season: &NewSeason) -> RepoResult<Season> {
        let mut rows = self.seasons.lock();
        let row = Season {
            id: next_id(rows.len()),
            season_id: season.season_id,
            title: season.title.clone(),
            description: season.description.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl ClassRepository for MemoryRepos {
    async fn find_all(&self) -> RepoResult<Vec<Class>> {
        Ok(self.classes.lock().clone())
    }

    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Class>> {
        Ok(self
            .classes
            .lock()
            .iter()
            .filter(|c| c.season_id == season_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, class: &NewClass) -> RepoResult<Class> {
        let mut rows = self.classes.lock();
        let row = Class {
            id: next_id(rows.len()),
            season_id: class.season_id,
            class_name: class.class_name.clone(),
            description: class.description.clone(),
            link: class.link.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl NoteRepository for MemoryRepos {
    async fn find_all(&self) -> RepoResult<Vec<Note>> {
        Ok(self.notes.lock().clone())
    }

    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Note>> {
        Ok(self
            .notes
            .lock()
            .iter()
            .filter(|n| n.season_id == season_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, note: &NewNote) -> RepoResult<Note> {
        let mut rows = self.notes.lock();
        let row = Note {
            id: next_id(rows.len()),
            season_id: note.season_id,
            title: note.title.clone(),
            drive_link: note.drive_link.clone(),
            description: note.description.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl ExamRepository for MemoryRepos {
    async fn find_all(&self) -> RepoResult<Vec<Exam>> {
        Ok(self.exams.lock().clone())
    }

    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Exam>> {
        Ok(self
            .exams
            .lock()
            .iter()
            .filter(|e| e.season_id == season_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, exam: &NewExam) -> RepoResult<Exam> {
        let mut rows = self.exams.lock();
        let row = Exam {
            id: next_id(rows.len()),
            season_id: exam.season_id,
            title: exam.title.clone(),
            link: exam.link.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl PostRepository for MemoryRepos {
    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        Ok(self.posts.lock().clone())
    }

    async fn find_by_season(&self, season_id: SeasonId) -> RepoResult<Vec<Post>> {
        Ok(self
            .posts
            .lock()
            .iter()
            .filter(|p| p.season_id == season_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, post: &NewPost) -> RepoResult<Post> {
        let mut rows = self.posts.lock();
        let row = Post {
            id: next_id(rows.len()),
            season_id: post.season_id,
            title: post.title.clone(),
            enroll_link: post.enroll_link.clone(),
            image_url: post.image_url.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl MemberRepository for MemoryRepos {
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        Ok(self.members.lock().clone())
    }

    async fn insert(&self, member: &NewMember) -> RepoResult<Member> {
        let mut rows = self.members.lock();
        let row = Member {
            id: next_id(rows.len()),
            name: member.name.clone(),
            role: member.role.clone(),
            contact: member.contact.clone(),
            photo_url: member.photo_url.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl UserRepository for MemoryRepos {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.users.lock().iter().any(|u| u.username == username))
    }

    async fn insert(&self, user: &NewUser) -> RepoResult<User> {
        let mut rows = self.users.lock();
        let row = User {
            id: next_id(rows.len()),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            email: user.email.clone(),
            student: user.student,
            approved: user.approved,
            courses_access: user.courses_access.clone(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

/// Context backed by one shared in-memory store; admin is `hasan`/`anam`
pub fn context() -> (ServiceContext, Arc<MemoryRepos>) {
    context_with_static_dir(Path::new("./static"))
}

pub fn context_with_static_dir(static_dir: &Path) -> (ServiceContext, Arc<MemoryRepos>) {
    let repos = Arc::new(MemoryRepos::default());
    let ctx = ServiceContextBuilder::new()
        .season_repo(repos.clone())
        .class_repo(repos.clone())
        .note_repo(repos.clone())
        .exam_repo(repos.clone())
        .post_repo(repos.clone())
        .member_repo(repos.clone())
        .user_repo(repos.clone())
        .admin(AdminConfig {
            username: "hasan".to_string(),
            password: "anam".to_string(),
        })
        .photo_storage(PhotoStorage::new(StorageConfig {
            static_dir: static_dir.to_path_buf(),
            max_file_size_mb: 1,
        }))
        .build()
        .expect("complete test context");
    (ctx, repos)
}

pub fn seed_user(repos: &MemoryRepos, username: &str, password: &str, student: bool, approved: bool) {
    let mut users = repos.users.lock();
    let id = next_id(users.len());
    users.push(User {
        id,
        username: username.to_string(),
        password_hash: hash_password(password).expect("hash"),
        email: format!("{username}@example.com"),
        student,
        approved,
        courses_access: Vec::new(),
        created_at: Utc::now(),
    });
}

pub fn seed_class(repos: &MemoryRepos, season: i64, name: &str, link: Option<&str>) {
    let mut classes = repos.classes.lock();
    let id = next_id(classes.len());
    classes.push(Class {
        id,
        season_id: SeasonId::new(season),
        class_name: name.to_string(),
        description: String::new(),
        link: link.map(str::to_string),
        created_at: Utc::now(),
    });
}

pub fn seed_post(repos: &MemoryRepos, season: i64, title: &str) {
    let mut posts = repos.posts.lock();
    let id = next_id(posts.len());
    posts.push(Post {
        id,
        season_id: SeasonId::new(season),
        title: title.to_string(),
        enroll_link: "https://forms.example/enroll".to_string(),
        image_url: "https://img.example/banner.png".to_string(),
        created_at: Utc::now(),
    });
}
