//! Scene rendering: default resolution and the X pattern

#[cfg(test)]
mod tests {
    use spaceplot_scene::{
        Class, ClosedPolygon, Color, DataPoint, DataSpace, Dimension, Label, Line, Point,
        Projectable, Raster, Renderable, SimpleShape, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    };

    fn populated() -> DataSpace {
        let mut space = DataSpace::new();
        space.x = Dimension {
            scale: 2.0,
            major_tic_spacing: 1.0,
            minor_tic_spacing: 0.25,
            show_major_tics: true,
            show_minor_tics: false,
            tilt_angle: 0.5,
        };
        space.push(
            DataPoint::new(1.0, 2.0, 3.0, Color::rgb(255, 0, 0))
                .with_label("a")
                .with_class("group"),
        );
        space.push(DataPoint::new(-1.0, 0.0, 9.0, Color::rgb(0, 255, 0)).with_label("a"));
        space
    }

    // ============ defaults ============

    #[test]
    fn test_render_resolves_defaults() {
        let mut space = DataSpace::new();
        let raster = space.render();

        assert_eq!(raster.width(), DEFAULT_WIDTH);
        assert_eq!(raster.height(), DEFAULT_HEIGHT);
        assert_eq!(space.width, 800);
        assert_eq!(space.height, 640);
        assert_eq!(space.background, Color::WHITE);
    }

    #[test]
    fn test_partial_defaults() {
        let mut space = DataSpace {
            height: 7,
            ..Default::default()
        };
        let raster = space.render();
        assert_eq!((raster.width(), raster.height()), (800, 7));
    }

    // ============ pattern ============

    #[test]
    fn test_corner_pixels() {
        let raster = DataSpace::new().render();
        let w = raster.width();
        assert_eq!(raster.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(raster.pixel(w - 1, 0), Some(Color::BLACK));
        assert_eq!(raster.pixel(1, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_pattern_everywhere() {
        let mut space = DataSpace {
            width: 9,
            height: 6,
            background: Color::rgb(10, 20, 30),
            ..Default::default()
        };
        let raster = space.render();
        for y in 0..6 {
            for x in 0..9 {
                let expected = if x == y || x + y == 8 {
                    Color::BLACK
                } else {
                    Color::rgb(10, 20, 30)
                };
                assert_eq!(raster.pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_content_does_not_change_output() {
        let mut empty = DataSpace::new();
        let mut full = populated();
        assert_eq!(empty.render(), full.render());
    }

    #[test]
    fn test_rgba_buffer_size() {
        let raster = DataSpace {
            width: 4,
            height: 3,
            ..Default::default()
        }
        .render();
        assert_eq!(raster.to_rgba_bytes().len(), 4 * 3 * 4);
    }

    // ============ scene description ============

    #[test]
    fn test_scene_json_roundtrip_keeps_points() {
        let space = populated();
        let json = serde_json::to_string(&space).unwrap();
        let back: DataSpace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, space);
        assert_eq!(back.data[1].label, Label("a".to_string()));
        assert_eq!(back.data[1].class, Class::default());
    }

    // ============ primitives ============

    #[test]
    fn test_primitives_on_rendered_raster() {
        let mut space = DataSpace {
            width: 10,
            height: 10,
            ..Default::default()
        };
        let mut raster: Raster = space.render();

        let mut poly = ClosedPolygon::default();
        poly.append_vertex(Point::new(1.0, 1.0, 1.0));
        poly.append_vertex(Point::new(2.0, 1.0, 1.0));
        assert_eq!(poly.project(&space), (0, 0));
        assert_eq!(poly.edges().count(), 2);

        let blue = Color::rgb(0, 0, 255);
        for (p1, p2) in poly.edges() {
            Line::new(p1, p2, blue).draw(&mut raster);
        }
        assert_eq!(raster.pixel(0, 0), Some(blue));
        assert_eq!(raster.pixel(5, 5), Some(Color::BLACK));
    }
}
