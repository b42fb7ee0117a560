#[cfg(test)]
mod explorer_tests {
    use explorer_tree::{Error as TreeError, Kind, Node, Outcome, Tree};
    use uuid::Uuid;

    use crate::{error::Error, navigation::Navigation, Explorer};

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn explorer() -> Explorer {
        Explorer::new(
            Tree::from_nodes(vec![
                Node::folder(
                    id(1),
                    "Documents",
                    vec![
                        Node::file(id(2), "cv.pdf"),
                        Node::folder(id(3), "Drafts", vec![Node::file(id(4), "draft.txt")]),
                    ],
                ),
                Node::folder(id(5), "Pictures", vec![]),
                Node::file(id(6), "File1.txt"),
                Node::file(id(7), "notes.doc"),
            ])
            .unwrap(),
        )
    }

    fn visible_ids(explorer: &Explorer) -> Vec<Uuid> {
        explorer.visible().iter().map(|node| node.id).collect()
    }

    #[test]
    fn starts_at_root() {
        let explorer = explorer();
        assert_eq!(explorer.navigation(), Navigation::AtRoot);
        assert_eq!(visible_ids(&explorer), vec![id(1), id(5), id(6), id(7)]);
        assert!(!explorer.location().show_back);

        let documents = &explorer.visible()[0];
        assert_eq!(documents.kind, Kind::Folder);
        assert!(documents.has_children);
        assert!(!explorer.visible()[1].has_children);
    }

    #[test]
    fn default_is_seeded() {
        let explorer = Explorer::default();
        let names: Vec<_> = explorer.visible().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Documents", "Pictures", "File1.txt", "File2.pdf"]);
    }

    #[test]
    fn open_folder_and_back() {
        let mut explorer = explorer();

        assert_eq!(explorer.open_folder(id(1)), Outcome::Applied);
        assert_eq!(explorer.navigation(), Navigation::InFolder(id(1)));
        assert_eq!(visible_ids(&explorer), vec![id(2), id(3)]);

        let location = explorer.location();
        assert!(location.show_back);
        assert_eq!(location.folder_id, Some(id(1)));
        assert_eq!(location.folder_name.as_deref(), Some("Documents"));

        assert_eq!(explorer.open_folder(id(3)), Outcome::Applied);
        assert_eq!(visible_ids(&explorer), vec![id(4)]);

        explorer.back();
        assert_eq!(explorer.navigation(), Navigation::AtRoot);
        assert_eq!(visible_ids(&explorer), vec![id(1), id(5), id(6), id(7)]);
    }

    #[test]
    fn only_folders_open() {
        let mut explorer = explorer();
        assert_eq!(
            explorer.open_folder(id(6)),
            Outcome::NoOp(TreeError::NotAFolder(id(6)))
        );
        assert_eq!(
            explorer.open_folder(id(60)),
            Outcome::NoOp(TreeError::NoSuchNode(id(60)))
        );
        assert_eq!(explorer.navigation(), Navigation::AtRoot);
    }

    #[test]
    fn search_filters_root() {
        let mut explorer = explorer();

        explorer.set_search_term("DOC");
        assert_eq!(explorer.search_term(), "doc");
        assert_eq!(visible_ids(&explorer), vec![id(1), id(7)]);

        explorer.set_search_term("doc");
        assert_eq!(visible_ids(&explorer), vec![id(1), id(7)]);

        explorer.set_search_term("");
        assert_eq!(visible_ids(&explorer).len(), 4);
    }

    #[test]
    fn search_is_ignored_in_folders() {
        let mut explorer = explorer();
        explorer.set_search_term("zzz");
        assert!(explorer.visible().is_empty());

        explorer.open_folder(id(1));
        assert_eq!(visible_ids(&explorer), vec![id(2), id(3)]);
    }

    #[test]
    fn create_uses_draft_and_current_folder() {
        let mut explorer = explorer();
        explorer.open_folder(id(5));

        explorer.set_draft_name("holiday.png");
        assert_eq!(explorer.create(Kind::File), Outcome::Applied);
        assert_eq!(explorer.draft_name(), "");

        assert_eq!(explorer.visible().len(), 1);
        assert_eq!(explorer.visible()[0].name, "holiday.png");
        assert_eq!(explorer.tree().roots().len(), 4);
    }

    #[test]
    fn create_at_root() {
        let mut explorer = explorer();
        explorer.set_draft_name("Music");
        assert!(explorer.create(Kind::Folder).is_applied());

        let last = explorer.visible().last().unwrap();
        assert_eq!(last.name, "Music");
        assert_eq!(last.kind, Kind::Folder);
    }

    #[test]
    fn empty_draft_is_ignored() {
        let mut explorer = explorer();
        explorer.set_draft_name("  ");

        assert_eq!(
            explorer.create(Kind::File),
            Outcome::NoOp(TreeError::InvalidName)
        );
        assert_eq!(explorer.draft_name(), "  ");
        assert_eq!(explorer.tree().len(), 7);
    }

    #[test]
    fn edit_commit_renames() {
        let mut explorer = explorer();

        explorer.begin_edit(id(6)).unwrap();
        assert!(explorer.is_editing(id(6)));
        assert_eq!(explorer.edit_name(id(6)), Some("File1.txt"));
        assert!(explorer.visible()[2].editing);

        explorer.set_edit_name(id(6), "readme.txt").unwrap();
        assert_eq!(explorer.commit_edit(id(6)), Ok(Outcome::Applied));

        assert!(!explorer.is_editing(id(6)));
        assert_eq!(explorer.visible()[2].name, "readme.txt");
        assert!(!explorer.visible()[2].editing);
    }

    #[test]
    fn edit_with_empty_name_keeps_old_name() {
        let mut explorer = explorer();
        explorer.begin_edit(id(6)).unwrap();
        explorer.set_edit_name(id(6), "").unwrap();

        assert_eq!(
            explorer.commit_edit(id(6)),
            Ok(Outcome::NoOp(TreeError::InvalidName))
        );
        assert!(!explorer.is_editing(id(6)));
        assert_eq!(explorer.visible()[2].name, "File1.txt");
    }

    #[test]
    fn edit_cancel() {
        let mut explorer = explorer();
        explorer.begin_edit(id(7)).unwrap();
        explorer.set_edit_name(id(7), "other").unwrap();
        explorer.cancel_edit(id(7)).unwrap();

        assert_eq!(explorer.visible()[3].name, "notes.doc");
        assert_eq!(explorer.commit_edit(id(7)), Err(Error::NotEditing(id(7))));
        assert_eq!(
            explorer.set_edit_name(id(7), "x"),
            Err(Error::NotEditing(id(7)))
        );
        assert_eq!(
            explorer.begin_edit(id(70)),
            Err(Error::Tree(TreeError::NoSuchNode(id(70))))
        );
    }

    #[test]
    fn deleting_drops_edit_state() {
        let mut explorer = explorer();
        explorer.begin_edit(id(4)).unwrap();
        assert_eq!(explorer.delete(id(3)), Outcome::Applied);
        assert!(!explorer.is_editing(id(4)));
    }

    #[test]
    fn deleting_open_folder_returns_to_root() {
        let mut explorer = explorer();
        explorer.open_folder(id(3));

        assert_eq!(explorer.delete(id(1)), Outcome::Applied);

        assert_eq!(explorer.navigation(), Navigation::AtRoot);
        assert_eq!(visible_ids(&explorer), vec![id(5), id(6), id(7)]);
        assert!(!explorer.tree().contains(id(4)));
    }

    #[test]
    fn open_folder_sees_fresh_contents() {
        let mut explorer = explorer();
        explorer.open_folder(id(5));
        explorer.move_node(id(6), id(5));
        assert_eq!(visible_ids(&explorer), vec![id(6)]);

        explorer.rename(id(6), "moved.txt");
        assert_eq!(explorer.visible()[0].name, "moved.txt");
    }

    #[test]
    fn drag_file_onto_folder() {
        let mut explorer = explorer();

        let payload = explorer.drag_start(id(6)).unwrap();
        assert_eq!(explorer.handle_drop(payload.onto(id(5))), Outcome::Applied);

        assert_eq!(visible_ids(&explorer), vec![id(1), id(5), id(7)]);
        assert_eq!(explorer.tree().parent_of(id(6)).unwrap().id, id(5));
    }

    #[test]
    fn drag_nested_node_out() {
        let mut explorer = explorer();
        explorer.open_folder(id(1));

        let payload = explorer.drag_start(id(4)).unwrap();
        assert!(explorer.handle_drop(payload.onto(id(5))).is_applied());
        assert_eq!(explorer.tree().parent_of(id(4)).unwrap().id, id(5));
    }

    #[test]
    fn invalid_drops_are_ignored() {
        let mut explorer = explorer();
        let before = explorer.tree().clone();

        let payload = explorer.drag_start(id(1)).unwrap();
        assert_eq!(
            explorer.handle_drop(payload.onto(id(6))),
            Outcome::NoOp(TreeError::NotAFolder(id(6)))
        );
        assert_eq!(
            explorer.handle_drop(payload.onto(id(1))),
            Outcome::NoOp(TreeError::WouldCycle {
                node: id(1),
                target: id(1)
            })
        );
        assert_eq!(
            explorer.handle_drop(payload.onto(id(3))),
            Outcome::NoOp(TreeError::WouldCycle {
                node: id(1),
                target: id(3)
            })
        );
        assert!(explorer.drag_start(id(99)).is_none());
        assert_eq!(explorer.tree(), &before);
    }

    #[test]
    fn updates_are_flagged() {
        let mut explorer = explorer();
        assert!(explorer.take_updated());
        assert!(!explorer.take_updated());

        explorer.set_search_term("pic");
        assert!(explorer.take_updated());
    }

    #[test]
    fn load_snapshot() {
        let mut explorer = explorer();
        explorer.open_folder(id(1));

        explorer.load(Tree::from_nodes(vec![Node::file(id(10), "only.txt")]).unwrap());

        assert_eq!(explorer.navigation(), Navigation::AtRoot);
        assert_eq!(visible_ids(&explorer), vec![id(10)]);
    }
}
