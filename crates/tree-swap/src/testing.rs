use crate::types::Node;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Plain {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
}

impl Node for Plain {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

pub(crate) fn arena(len: usize) -> Vec<Plain> {
    vec![Plain::default(); len]
}

pub(crate) fn link_left(arena: &mut [Plain], parent: u32, child: u32) {
    arena[parent as usize].l = Some(child);
    arena[child as usize].p = Some(parent);
}

pub(crate) fn link_right(arena: &mut [Plain], parent: u32, child: u32) {
    arena[parent as usize].r = Some(child);
    arena[child as usize].p = Some(parent);
}
