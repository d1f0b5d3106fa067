//! 세션별 언어 선택.
//!
//! 언어는 전역 상태가 아니라 조회 호출마다 넘기는 명시적 컨텍스트다.
//! 여러 사용자를 동시에 다루는 화면은 `SessionRegistry`로 세션 ID마다 언어를 따로 든다.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use thiserror::Error;

use crate::i18n::{Language, Translator};

/// 한 사용자의 표시 언어 컨텍스트.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    language: Language,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// 언어를 반대쪽으로 바꾸고 바뀐 언어를 돌려준다.
    pub fn toggle(&mut self) -> Language {
        self.language = self.language.other();
        log::debug!("session language toggled to {}", self.language.as_code());
        self.language
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{0} not found")]
    NotFound(SessionId),
}

/// 세션 ID → 언어 매핑. 세션끼리는 서로의 선택을 보지도 바꾸지도 않는다.
/// 동봉된 CLI/GUI는 사용자가 한 명이라 `Session` 하나로 충분하고, 이 레지스트리는 여러 사용자를 받는 프런트엔드용이다.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Session>,
    next_id: AtomicU64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, language: Language) -> SessionId {
        let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.sessions.insert(id, Session::new(language));
        log::debug!("{id} opened ({})", language.as_code());
        id
    }

    pub fn session(&self, id: SessionId) -> Result<Session, SessionError> {
        self.sessions
            .get(&id)
            .map(|s| *s)
            .ok_or(SessionError::NotFound(id))
    }

    pub fn language(&self, id: SessionId) -> Result<Language, SessionError> {
        self.session(id).map(|s| s.language())
    }

    pub fn set_language(&self, id: SessionId, language: Language) -> Result<(), SessionError> {
        let mut entry = self.sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        entry.set_language(language);
        Ok(())
    }

    pub fn toggle(&self, id: SessionId) -> Result<Language, SessionError> {
        let mut entry = self.sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        Ok(entry.toggle())
    }

    pub fn close(&self, id: SessionId) -> Result<(), SessionError> {
        self.sessions
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
