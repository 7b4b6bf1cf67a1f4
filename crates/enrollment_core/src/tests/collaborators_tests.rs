use super::*;

const VALID_TAG: &str = "ABCDEFGHIJ123";

fn fill_required(list: &mut CollaboratorList, id: CollaboratorId) {
    list.update(id, CollaboratorField::Tag, VALID_TAG);
    list.update(id, CollaboratorField::FirstName, "Ana");
    list.update(id, CollaboratorField::LastName, "Rojas");
    list.update(id, CollaboratorField::Company, "Minera");
    list.update(id, CollaboratorField::JobTitle, "Supervisora");
}

#[test]
fn starts_empty_and_collapsed() {
    let list = CollaboratorList::new();
    assert!(list.is_empty());
    assert!(!list.section_open());
    assert_eq!(list.add_label(), "Add collaborator");
}

#[test]
fn add_opens_section_and_assigns_sequential_ids() {
    let mut list = CollaboratorList::new();
    assert_eq!(list.add(), Some(CollaboratorId(1)));
    assert_eq!(list.add(), Some(CollaboratorId(2)));
    assert!(list.section_open());
    assert_eq!(list.add_label(), "Add another collaborator");
}

#[test]
fn add_is_capped_at_twenty() {
    let mut list = CollaboratorList::new();
    for _ in 0..MAX_COLLABORATORS {
        assert!(list.add().is_some());
    }
    assert!(!list.can_add());
    assert_eq!(list.add(), None);
    assert_eq!(list.len(), MAX_COLLABORATORS);
}

#[test]
fn add_label_reports_full_list() {
    let mut list = CollaboratorList::new();
    for _ in 0..MAX_COLLABORATORS {
        list.add().expect("room");
    }
    assert_eq!(list.add_label(), "Maximum 20 collaborators");

    let last = list.iter().last().expect("last").id;
    list.remove(last);
    assert_eq!(list.add_label(), "Add another collaborator");
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut list = CollaboratorList::new();
    let first = list.add().expect("first");
    let second = list.add().expect("second");
    assert!(list.remove(second));
    let third = list.add().expect("third");
    assert_ne!(third, second);
    assert_eq!(third, CollaboratorId(3));

    assert!(list.remove(first));
    assert!(list.remove(third));
    assert_eq!(list.add(), Some(CollaboratorId(4)));
}

#[test]
fn removing_last_collaborator_collapses_section() {
    let mut list = CollaboratorList::new();
    let only = list.add().expect("add");
    assert!(list.remove(only));
    assert!(list.is_empty());
    assert!(!list.section_open());
}

#[test]
fn removing_one_of_several_keeps_section_open() {
    let mut list = CollaboratorList::new();
    let first = list.add().expect("add");
    list.add().expect("add");
    assert!(list.remove(first));
    assert!(list.section_open());
    assert_eq!(list.len(), 1);
}

#[test]
fn back_to_back_removals_collapse_only_when_empty() {
    let mut list = CollaboratorList::new();
    let a = list.add().expect("add");
    let b = list.add().expect("add");
    assert!(list.remove(a));
    assert!(list.section_open());
    assert!(list.remove(b));
    assert!(!list.section_open());
}

#[test]
fn removing_unknown_id_changes_nothing() {
    let mut list = CollaboratorList::new();
    list.add().expect("add");
    assert!(!list.remove(CollaboratorId(99)));
    assert_eq!(list.len(), 1);
    assert!(list.section_open());
}

#[test]
fn removal_drops_cached_errors() {
    let mut list = CollaboratorList::new();
    let id = list.add().expect("add");
    assert!(list.errors_for(id).is_some());
    list.remove(id);
    assert!(list.errors_for(id).is_none());
    assert!(list.errors().is_empty());
}

#[test]
fn update_touches_only_the_target_field() {
    let mut list = CollaboratorList::new();
    let id = list.add().expect("add");
    fill_required(&mut list, id);
    assert!(list.update(id, CollaboratorField::Passport, "P-99"));

    let c = list.get(id).expect("collaborator");
    assert_eq!(c.first_name, "Ana");
    assert_eq!(c.tag, VALID_TAG);
    assert_eq!(c.passport.as_deref(), Some("P-99"));
}

#[test]
fn update_applies_input_transforms() {
    let mut list = CollaboratorList::new();
    let id = list.add().expect("add");
    list.update(id, CollaboratorField::Tag, "abcdefghij1234");
    list.update(id, CollaboratorField::SapCode, "sap-00123");

    let c = list.get(id).expect("collaborator");
    assert_eq!(c.tag, "ABCDEFGHIJ123");
    assert_eq!(c.sap_code.as_deref(), Some("00123"));
}

#[test]
fn clearing_an_optional_field_stores_none() {
    let mut list = CollaboratorList::new();
    let id = list.add().expect("add");
    list.update(id, CollaboratorField::Unit, "Planta");
    list.update(id, CollaboratorField::Unit, "");
    assert_eq!(list.get(id).expect("collaborator").unit, None);

    list.update(id, CollaboratorField::ContractNumber, "abc");
    assert_eq!(list.get(id).expect("collaborator").contract_number, None);
}

#[test]
fn update_unknown_id_is_ignored() {
    let mut list = CollaboratorList::new();
    assert!(!list.update(CollaboratorId(5), CollaboratorField::Tag, VALID_TAG));
}

#[test]
fn error_cache_tracks_each_edit() {
    let mut list = CollaboratorList::new();
    let id = list.add().expect("add");
    assert!(!list.is_valid(id));
    fill_required(&mut list, id);
    assert!(list.is_valid(id));
    assert!(list.errors_for(id).is_none());

    list.update(id, CollaboratorField::Tag, "abc");
    let errors = list.errors_for(id).expect("errors");
    assert_eq!(errors.errors.len(), 1);
    assert!(errors.error(CollaboratorField::Tag).is_some());
}

#[test]
fn one_valid_collaborator_among_invalid_ones_is_enough() {
    let mut list = CollaboratorList::new();
    list.add().expect("add");
    let good = list.add().expect("add");
    list.add().expect("add");
    fill_required(&mut list, good);

    assert!(list.has_valid());
    let valid: Vec<_> = list.valid().map(|c| c.id).collect();
    assert_eq!(valid, vec![good]);
}

#[test]
fn position_labels_follow_current_order() {
    let mut list = CollaboratorList::new();
    let a = list.add().expect("add");
    let b = list.add().expect("add");
    assert_eq!(list.position_label(b).as_deref(), Some("Collaborator 2"));
    list.remove(a);
    assert_eq!(list.position_label(b).as_deref(), Some("Collaborator 1"));
    assert_eq!(list.position_label(a), None);
}
