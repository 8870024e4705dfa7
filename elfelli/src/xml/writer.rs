use crate::scene::Scene;

use super::VERSION;

/// Serializes `scene`, point charges first, one object per line.
pub fn write_scene(scene: &Scene) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str(&format!("<scene version=\"{}\">\n", VERSION));

    for c in scene.charges() {
        out.push_str(&format!(
            "  <point x=\"{}\" y=\"{}\" charge=\"{}\" />\n",
            c.position.x, c.position.y, c.charge
        ));
    }
    for p in scene.plates() {
        let (a, b) = (p.a(), p.b());
        out.push_str(&format!(
            "  <plate x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" charge=\"{}\" />\n",
            a.x, a.y, b.x, b.y, p.charge
        ));
    }

    out.push_str("</scene>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;

    #[test]
    fn layout() {
        let mut scene = Scene::new();
        scene
            .add_plate(vec2(0.0, 0.0), vec2(100.0, 0.0), -2.0)
            .unwrap();
        scene.add_charge(vec2(10.0, 20.5), 4.0);

        assert_eq!(
            write_scene(&scene),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <scene version=\"elfelli-xml-1\">\n  \
             <point x=\"10\" y=\"20.5\" charge=\"4\" />\n  \
             <plate x1=\"0\" y1=\"0\" x2=\"100\" y2=\"0\" charge=\"-2\" />\n\
             </scene>\n"
        );
    }

    #[test]
    fn empty() {
        assert_eq!(
            write_scene(&Scene::new()),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<scene version=\"elfelli-xml-1\">\n</scene>\n"
        );
    }
}
