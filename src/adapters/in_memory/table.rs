use crate::domain::{Entity, SequentialId};
use crate::ports::{StoreError, StoreResult};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// エンティティ1種別分のインメモリテーブル
///
/// 行と採番カウンタを1つの `RwLock` で保護する。
/// 書き込み（保存・削除）は互いに、また読み取りとも直列化される。
/// 読み取りは常にクローンを返すため、更新途中の値が見えることはない。
pub struct InMemoryTable<E: Entity> {
    state: RwLock<TableState<E>>,
}

struct TableState<E: Entity> {
    rows: BTreeMap<E::Id, E>,
    /// 次に採番する連番。すべての行のキーはこれより小さい。
    /// `None` は最大値まで使い切ったことを表す。
    next_sequence: Option<u64>,
}

impl<E: Entity> InMemoryTable<E> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                next_sequence: Some(1),
            }),
        }
    }

    /// すべての行をID昇順で返す
    pub fn all(&self) -> Vec<E> {
        self.state.read().rows.values().cloned().collect()
    }

    pub fn get(&self, id: E::Id) -> Option<E> {
        self.state.read().rows.get(&id).cloned()
    }

    /// 行を保存する
    ///
    /// IDが未設定なら次の連番を付与して追加する。設定済みならそのキーの行を丸ごと置き換える。
    /// 明示的に指定されたIDがカウンタ以上の場合はカウンタをその次まで進め、
    /// 以降の採番が既存の行と衝突しないようにする。
    ///
    /// # エラー
    /// - IdsExhausted: IDが未設定で、採番できる連番が残っていない（テーブルは変更されない）
    pub fn upsert(&self, mut entity: E) -> StoreResult<E> {
        let mut state = self.state.write();

        let id = match entity.id() {
            Some(id) => {
                if state
                    .next_sequence
                    .is_some_and(|next| id.sequence() >= next)
                {
                    state.next_sequence = id.sequence().checked_add(1);
                }
                id
            }
            None => {
                let Some(sequence) = state.next_sequence else {
                    tracing::warn!(kind = E::KIND, "id sequence exhausted");
                    return Err(StoreError::IdsExhausted(E::KIND));
                };
                let id = E::Id::from_sequence(sequence);
                state.next_sequence = sequence.checked_add(1);
                entity.set_id(id);
                id
            }
        };

        state.rows.insert(id, entity.clone());
        tracing::debug!(kind = E::KIND, %id, "row saved");
        Ok(entity)
    }

    /// 行を削除する（存在しない場合は何もしない）
    pub fn remove(&self, id: E::Id) {
        if self.state.write().rows.remove(&id).is_some() {
            tracing::debug!(kind = E::KIND, %id, "row removed");
        }
    }

    /// 条件に一致する行をすべて返す
    pub fn filter<P>(&self, predicate: P) -> Vec<E>
    where
        P: Fn(&E) -> bool,
    {
        self.state
            .read()
            .rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// 条件に一致する最初の行を返す
    pub fn find_first<P>(&self, predicate: P) -> Option<E>
    where
        P: Fn(&E) -> bool,
    {
        self.state
            .read()
            .rows
            .values()
            .find(|row| predicate(row))
            .cloned()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.state.read().rows.len()
    }
}

impl<E: Entity> Default for InMemoryTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, BookId};
    use std::sync::Arc;

    fn book(title: &str) -> Book {
        Book::new("isbn", title, "author", "available")
    }

    #[test]
    fn test_upsert_assigns_sequential_ids_from_one() {
        let table: InMemoryTable<Book> = InMemoryTable::new();

        let first = table.upsert(book("a")).unwrap();
        let second = table.upsert(book("b")).unwrap();

        assert_eq!(first.id, Some(BookId::new(1)));
        assert_eq!(second.id, Some(BookId::new(2)));
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let table: InMemoryTable<Book> = InMemoryTable::new();
        let first = table.upsert(book("a")).unwrap();

        table.remove(first.id.unwrap());
        let second = table.upsert(book("b")).unwrap();

        assert_eq!(second.id, Some(BookId::new(2)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_upsert_with_id_replaces_whole_row() {
        let table: InMemoryTable<Book> = InMemoryTable::new();
        let saved = table.upsert(book("a")).unwrap();

        let replacement = Book {
            id: saved.id,
            ..Book::new("other", "b", "someone", "loaned")
        };
        table.upsert(replacement.clone()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(saved.id.unwrap()), Some(replacement));
    }

    #[test]
    fn test_explicit_id_advances_counter() {
        let table: InMemoryTable<Book> = InMemoryTable::new();
        table
            .upsert(Book {
                id: Some(BookId::new(5)),
                ..book("explicit")
            })
            .unwrap();

        let next = table.upsert(book("generated")).unwrap();

        assert_eq!(next.id, Some(BookId::new(6)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_explicit_max_id_exhausts_sequence_without_overwriting() {
        let table: InMemoryTable<Book> = InMemoryTable::new();
        let first = table.upsert(book("a")).unwrap();
        let top = table
            .upsert(Book {
                id: Some(BookId::new(u64::MAX)),
                ..book("top")
            })
            .unwrap();

        let result = table.upsert(book("generated"));

        assert_eq!(result, Err(StoreError::IdsExhausted("book")));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(first.id.unwrap()), Some(first));
        assert_eq!(table.get(BookId::new(u64::MAX)), Some(top));
    }

    #[test]
    fn test_sequence_can_issue_max_id_once() {
        let table: InMemoryTable<Book> = InMemoryTable::new();
        table
            .upsert(Book {
                id: Some(BookId::new(u64::MAX - 1)),
                ..book("explicit")
            })
            .unwrap();

        let last = table.upsert(book("last")).unwrap();

        assert_eq!(last.id, Some(BookId::new(u64::MAX)));
        assert!(table.upsert(book("overflow")).is_err());
        assert_eq!(table.len(), 2);

        // IDを指定した保存は引き続き可能
        let replaced = table
            .upsert(Book {
                title: "renamed".to_string(),
                ..last
            })
            .unwrap();
        assert_eq!(table.get(BookId::new(u64::MAX)), Some(replaced));
    }

    #[test]
    fn test_remove_missing_row_is_noop() {
        let table: InMemoryTable<Book> = InMemoryTable::new();
        table.upsert(book("a")).unwrap();

        table.remove(BookId::new(99));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_filter_and_find_first() {
        let table: InMemoryTable<Book> = InMemoryTable::new();
        table.upsert(book("El Quijote")).unwrap();
        table.upsert(book("Cien años de soledad")).unwrap();
        table.upsert(book("Quijote II")).unwrap();

        let matches = table.filter(|b| b.title.contains("Quijote"));
        assert_eq!(matches.len(), 2);

        let first = table.find_first(|b| b.title.contains("Quijote"));
        assert_eq!(first.map(|b| b.title), Some("El Quijote".to_string()));
    }

    #[test]
    fn test_concurrent_inserts_get_distinct_ids() {
        let table = Arc::new(InMemoryTable::<Book>::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| table.upsert(book(&format!("{i}-{j}"))).unwrap().id.unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<BookId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 200);
        assert_eq!(table.len(), 200);
        assert_eq!(ids.last(), Some(&BookId::new(200)));
    }
}
