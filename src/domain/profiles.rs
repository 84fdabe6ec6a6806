use crate::domain::models::Entity;

impl Entity {
    /// Short biography shown on the character card.
    pub fn bio(self) -> &'static str {
        match self {
            Entity::ObiwanKenobi => "Obi-Wan Kenobi avance comme une lame calme. Maître Jedi, gardien d’un équilibre fragile, il porte la discipline comme une armure, et la compassion comme une faille assumée.",
            Entity::DarkVador => "Dark Vador ne marche pas : il s’impose. Chaque respiration est un écho du passé. Il a aimé, il a chuté… et dans l’ombre qu’il a embrassée, il cherche encore une rédemption.",
            Entity::LukeSkywalker => "Luke Skywalker est l’étincelle improbable. Un garçon du désert qui refuse d’abandonner. Il prouve qu’un héritage ne définit pas un destin. Le choix, oui.",
            Entity::Yoda => "Yoda parle peu, mais chaque mot pèse. Gardien de la sagesse millénaire, il sait que la Force n’est ni lumière ni obscurité, mais équilibre.",
            Entity::R2d2 => "Petit droïde au courage immense. R2-D2 ne brandit pas de sabre laser, mais sans lui, les héros seraient souvent perdus. Fidèle, ingénieux, indispensable.",
            Entity::C3po => "C-3PO connaît six millions de formes de communication… mais peine encore à comprendre le chaos humain. Peureux parfois, loyal toujours.",
            Entity::Chewbacca => "Chewbacca est une force brute guidée par un cœur immense. Derrière chaque rugissement se cache une loyauté inébranlable.",
            Entity::HanSolo => "Han Solo se prétend mercenaire, mais agit en héros. Cynique en façade, noble au fond. Il choisit toujours le bon camp, même quand il prétend le contraire.",
            Entity::PadmeAmidala => "Padmé Amidala combat sans sabre laser. Diplomate brillante, elle croit en la République quand tout vacille. Son courage est silencieux, mais décisif.",
            Entity::AnakinSkywalker => "Anakin Skywalker est la promesse et la tragédie. Puissant au-delà de toute mesure, il cherche à vaincre la peur… et finit par en devenir l’esclave.",
            Entity::Palpatine => "Palpatine ne conquiert pas par la force brute, mais par la patience. Stratège de l’ombre, il manipule les événements jusqu’à ce que la galaxie plie.",
            Entity::MaitreWindu => "Maître Windu incarne la rigueur absolue. Maîtrisant le Vaapad, il flirte avec l’ombre sans s’y perdre. Une autorité rare, une puissance redoutable.",
        }
    }

    /// Portrait path, relative to the asset directory.
    pub fn image(self) -> &'static str {
        match self {
            Entity::ObiwanKenobi => "Images/Obiwan_Kenobi.jpg",
            Entity::DarkVador => "Images/DarkVador.jpg",
            Entity::LukeSkywalker => "Images/Luke_Skywalker.jpg",
            Entity::Yoda => "Images/Yoda.jpg",
            Entity::R2d2 => "Images/R2D2.jpg",
            Entity::C3po => "Images/C3PO.jpg",
            Entity::Chewbacca => "Images/Chewbacca.jpg",
            Entity::HanSolo => "Images/Han_Solo.jpg",
            Entity::PadmeAmidala => "Images/Padme_Amidala.jpg",
            Entity::AnakinSkywalker => "Images/Anakin_Skywalker.jpg",
            Entity::Palpatine => "Images/Palpatine.jpg",
            Entity::MaitreWindu => "Images/Maitre_Windu.jpg",
        }
    }
}
