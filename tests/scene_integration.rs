//! Scene registry and game object lifecycle integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use gamecore2d::components::boxcollider::BoxCollider;
use gamecore2d::components::component::{Component, DEFAULT_TAG};
use gamecore2d::components::sprite::Sprite;
use gamecore2d::error::EngineError;
use gamecore2d::events::collision::ON_COLLISION;
use gamecore2d::events::event::Event;
use gamecore2d::gameobject::GameObject;
use gamecore2d::geometry::{Point, Rectangle};
use gamecore2d::processor::GameProcessor;
use gamecore2d::resources::texture::{HeadlessTexture, share_texture};
use gamecore2d::scene::{Scene, SceneManager};

fn boxed(name: &str, x: i32, y: i32) -> GameObject {
    let mut obj = GameObject::new(name);
    obj.add_component(BoxCollider::new("body", Rectangle::from_wh(Point::new(x, y), 4, 4)));
    obj
}

#[test]
fn active_scene_drives_processing() {
    let hits = Rc::new(RefCell::new(Vec::new()));
    let mut menu = Scene::new("menu");
    menu.add_gameobject(boxed("cursor", 0, 0));
    let mut level = Scene::new("level");
    let mut hero = boxed("hero", 0, 0);
    let log = Rc::clone(&hits);
    hero.on_collision(move |this, other| {
        log.borrow_mut().push(format!("{}/{}", this.name(), other.name()));
        Ok(())
    });
    level.add_gameobject(hero);
    level.add_gameobject(boxed("coin", 2, 2));

    let mut manager = SceneManager::new();
    manager.add_scene(menu);
    manager.add_scene(level);

    manager.set_active_scene("menu").unwrap();
    GameProcessor::process(manager.active_scene().unwrap()).unwrap();
    assert!(hits.borrow().is_empty());

    manager.set_active_scene("level").unwrap();
    GameProcessor::process(manager.active_scene().unwrap()).unwrap();
    assert_eq!(*hits.borrow(), ["hero/coin"]);
}

#[test]
fn missing_entries_report_not_found() {
    let mut manager = SceneManager::new();
    assert!(matches!(manager.get_scene("x"), Err(EngineError::NotFound(_))));
    assert!(matches!(manager.remove_scene("x"), Err(EngineError::NotFound(_))));

    let mut scene = Scene::new("s");
    assert!(matches!(scene.get_gameobject(0), Err(EngineError::NotFound(_))));
    assert!(matches!(scene.remove_gameobject(0), Err(EngineError::NotFound(_))));

    let mut obj = GameObject::new("o");
    assert!(matches!(obj.get_component("body"), Err(EngineError::NotFound(_))));
    assert!(matches!(obj.remove_component("body"), Err(EngineError::NotFound(_))));
    assert!(matches!(
        obj.event_handler().get("on_jump"),
        Err(EngineError::NotFound(_))
    ));
}

#[test]
fn gameobject_event_handler_rules() {
    let mut obj = GameObject::tagged("o", "player");
    assert_eq!(obj.tag(), "player");
    let handler = obj.event_handler_mut();

    assert!(matches!(
        handler.add_event(ON_COLLISION, Event::new()),
        Err(EngineError::DuplicateKey(_))
    ));
    handler.add_event("x", Event::new()).unwrap();
    assert!(matches!(
        handler.add_event("x", Event::new()),
        Err(EngineError::DuplicateKey(_))
    ));
    assert!(matches!(
        handler.remove_event(ON_COLLISION),
        Err(EngineError::NotRemovable(_))
    ));
    handler.remove_event("x").unwrap();

    let mut names: Vec<&str> = obj.event_handler().names().collect();
    names.sort_unstable();
    assert_eq!(names, [ON_COLLISION]);
}

#[test]
fn components_keep_attachment_order_and_tags() {
    let mut obj = GameObject::new("o");
    obj.add_component(Sprite::tagged(
        "look",
        "visual",
        share_texture(HeadlessTexture::default()),
    ));
    obj.add_component(BoxCollider::new("body", Rectangle::from_wh(Point::new(0, 0), 1, 1)));
    obj.add_component(BoxCollider::tagged(
        "feet",
        "ground",
        Rectangle::from_wh(Point::new(0, 1), 1, 1),
    ));

    let summary: Vec<(&str, &str, &str)> = obj
        .components()
        .iter()
        .map(|c| (c.name(), c.tag(), c.kind()))
        .collect();
    assert_eq!(
        summary,
        [
            ("look", "visual", "sprite"),
            ("body", DEFAULT_TAG, "box_collider"),
            ("feet", "ground", "box_collider"),
        ]
    );

    let removed = obj.remove_component("look").unwrap();
    assert!(matches!(removed, Component::Sprite(_)));
    assert_eq!(obj.component_names().collect::<Vec<_>>(), ["body", "feet"]);
}
