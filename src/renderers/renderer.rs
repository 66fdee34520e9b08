// Copyright @yucwang 2021

use crate::core::scene::Scene;
use crate::renderers::frame::AovFrame;

pub trait Renderer {
    fn render(&self, scene: &Scene) -> AovFrame;
}
