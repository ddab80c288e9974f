use pretty_assertions::assert_eq;
use termenu::{Error, Result, Slot, SurfaceSpec, testing};

#[test]
fn nested_surfaces_restore_the_base() -> Result<()> {
    let (_, mut screen) = testing::screen(40, 12, [])?;
    let base = screen.style(Slot::ScreenBackground);
    screen.write(0, 0, "base text", base);
    let before = screen.snapshot();

    let a = screen.open(SurfaceSpec::new(8, 30, 1, 1).with_title("one"))?;
    let b = screen.open(SurfaceSpec::new(6, 20, 2, 4).with_title("two"))?;
    let c = screen.open(SurfaceSpec::new(3, 10, 3, 6).with_style(Slot::Error))?;
    let st = c.style();
    screen.draw(&c, 1, 1, "top", st);
    assert_eq!(screen.depth(), 3);
    assert_ne!(screen.snapshot(), before);

    screen.close(c)?;
    screen.close(b)?;
    screen.close(a)?;
    assert_eq!(screen.depth(), 0);
    assert_eq!(screen.snapshot(), before);
    Ok(())
}

#[test]
fn closing_out_of_order_fails() -> Result<()> {
    let (_, mut screen) = testing::screen(40, 12, [])?;
    let a = screen.open(SurfaceSpec::new(8, 30, 1, 1))?;
    let _b = screen.open(SurfaceSpec::new(4, 10, 2, 2))?;
    assert!(matches!(screen.close(a), Err(Error::Surface(_))));
    assert_eq!(screen.depth(), 2);
    Ok(())
}

#[test]
fn oversized_surfaces_are_rejected() -> Result<()> {
    let (_, mut screen) = testing::screen(20, 6, [])?;
    assert!(matches!(
        screen.open(SurfaceSpec::new(10, 10, 0, 0)),
        Err(Error::Configuration(_))
    ));
    assert_eq!(screen.depth(), 0);
    Ok(())
}
